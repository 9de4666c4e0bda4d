//! Error types.
//!
//! Two fatal classes exist: [`ConfigError`] for broken rules or parameters,
//! and [`DataIntegrityError`] for rosters that cannot be allocated as given.
//! Both are raised before any expensive work starts.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for a `compute` call.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),
}

/// Missing or invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration key: {0}")]
    MissingKey(String),

    #[error("no categories configured")]
    NoCategories,

    #[error("category name is blank")]
    BlankCategoryName,

    #[error("category {category}: invalid capacity {value}")]
    InvalidCapacity { category: String, value: String },

    #[error("category {category}: invalid special flag {value}")]
    InvalidSpecialFlag { category: String, value: String },

    #[error("category {category}: subgroup count must be a positive integer, got {value}")]
    InvalidSubgroupCount { category: String, value: String },

    #[error("column binding {0} is empty")]
    EmptyBinding(&'static str),

    #[error("invalid annealing parameter: {0}")]
    InvalidAnnealing(String),

    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Input tables that violate the roster contract.
#[derive(Debug, Error)]
pub enum DataIntegrityError {
    #[error("{table} table is missing required column {column}")]
    MissingColumn { table: &'static str, column: String },

    #[error("{table} table row {row} has no identifier")]
    MissingIdentifier { table: &'static str, row: usize },

    #[error("duplicate identifier {id} in rows {first_row} and {row}")]
    DuplicateIdentifier {
        id: String,
        first_row: usize,
        row: usize,
    },

    #[error("individual {id}: preference {rank} is blank")]
    BlankPreference { id: String, rank: usize },

    #[error("individual {id}: preference {rank} names unconfigured category {value}")]
    UnknownPreference {
        id: String,
        rank: usize,
        value: String,
    },

    #[error("individual {id}: expected {expected} preferences, got {actual}")]
    PreferenceCount {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("{table} table row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        table: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("malformed table: {0}")]
    MalformedTable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_wraps_transparently() {
        let err: Error = ConfigError::MissingKey("nameK".into()).into();
        assert_eq!(err.to_string(), "missing required configuration key: nameK");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_data_integrity_message() {
        let err = DataIntegrityError::UnknownPreference {
            id: "17".into(),
            rank: 2,
            value: "Chess".into(),
        };
        assert_eq!(
            err.to_string(),
            "individual 17: preference 2 names unconfigured category Chess"
        );
    }
}
