//! JSON configuration loading.
//!
//! File format:
//!
//! ```json
//! {
//!   "categories": {
//!     "Robotics": [12, true, 3],
//!     "Sports":   [-1, false, 0]
//!   },
//!   "nameK": "Name",
//!   "sidK": "Student Number",
//!   "prefMainK": "Preference ",
//!   "extsidK": "SID",
//!   "extBK": "Buddy Group"
//! }
//! ```
//!
//! Each category maps to `[capacity, is_special, subgroup_count]`.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::model::Config;
use super::types::{Capacity, Category, ColumnBindings};
use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
struct RawConfig {
    categories: Option<IndexMap<String, (Value, Value, Value)>>,
    #[serde(rename = "nameK")]
    name: Option<String>,
    #[serde(rename = "sidK")]
    id: Option<String>,
    #[serde(rename = "prefMainK")]
    preference_prefix: Option<String>,
    #[serde(rename = "extsidK")]
    external_id: Option<String>,
    #[serde(rename = "extBK")]
    buddy_group: Option<String>,
}

fn required<T>(value: Option<T>, key: &str) -> Result<T, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingKey(key.to_string()))
}

/// Reads an integer that may have been written as a JSON number or a
/// numeric string.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 1e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn category(name: String, raw: &(Value, Value, Value)) -> Result<Category, ConfigError> {
    let (capacity, special, subgroups) = raw;

    let capacity = integer(capacity)
        .and_then(Capacity::from_raw)
        .ok_or_else(|| ConfigError::InvalidCapacity {
            category: name.clone(),
            value: capacity.to_string(),
        })?;

    let special = flag(special).ok_or_else(|| ConfigError::InvalidSpecialFlag {
        category: name.clone(),
        value: special.to_string(),
    })?;

    let mut category = Category::new(name, capacity);
    if special {
        let count = integer(subgroups)
            .filter(|&n| n >= 1)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| ConfigError::InvalidSubgroupCount {
                category: category.name.clone(),
                value: subgroups.to_string(),
            })?;
        category = category.with_subgroups(count);
    }
    Ok(category)
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::config::{Capacity, Config};
    ///
    /// let config = Config::from_json_str(r#"{
    ///     "categories": {"Robotics": [12, true, 3], "Sports": [-1, false, 0]},
    ///     "nameK": "Name", "sidK": "SID", "prefMainK": "Pref",
    ///     "extsidK": "SID", "extBK": "Buddy"
    /// }"#).unwrap();
    /// assert_eq!(config.category("Sports").unwrap().capacity, Capacity::Unlimited);
    /// assert_eq!(config.category("Robotics").unwrap().subgroups, Some(3));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let bindings = ColumnBindings {
            name: required(raw.name, "nameK")?,
            id: required(raw.id, "sidK")?,
            preference_prefix: required(raw.preference_prefix, "prefMainK")?,
            external_id: required(raw.external_id, "extsidK")?,
            buddy_group: required(raw.buddy_group, "extBK")?,
        };

        let mut config = Config::new(bindings);
        for (name, rule) in required(raw.categories, "categories")? {
            config = config.with_category(category(name, &rule)?);
        }

        config.validate()?;
        tracing::debug!(
            categories = config.category_count(),
            special = config.special_categories().count(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(categories: &str) -> String {
        format!(
            r#"{{"categories": {categories},
                "nameK": "Name", "sidK": "SID", "prefMainK": "Pref",
                "extsidK": "ExtSID", "extBK": "Buddy"}}"#
        )
    }

    #[test]
    fn test_load_preserves_file_order() {
        let config =
            Config::from_json_str(&document(r#"{"Zeta": [-1, false, 0], "Alpha": [2, false, 0]}"#))
                .unwrap();
        let names: Vec<_> = config.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
        assert_eq!(config.bindings().external_id, "ExtSID");
        assert_eq!(config.bindings().preference_column(2), "Pref2");
    }

    #[test]
    fn test_load_string_encoded_values() {
        let config =
            Config::from_json_str(&document(r#"{"A": ["4", "true", "2"]}"#)).unwrap();
        let a = config.category("A").unwrap();
        assert_eq!(a.capacity, Capacity::Limited(4));
        assert_eq!(a.subgroups, Some(2));
    }

    #[test]
    fn test_subgroup_count_ignored_for_regular() {
        let config = Config::from_json_str(&document(r#"{"A": [3, false, 0]}"#)).unwrap();
        assert!(!config.category("A").unwrap().is_special());
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_json_str(r#"{"categories": {"A": [1, false, 0]}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(k) if k == "nameK"));

        let err = Config::from_json_str(
            r#"{"nameK": "N", "sidK": "S", "prefMainK": "P", "extsidK": "E", "extBK": "B"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(k) if k == "categories"));
    }

    #[test]
    fn test_unparsable_capacity() {
        let err = Config::from_json_str(&document(r#"{"A": ["lots", false, 0]}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity { .. }));

        let err = Config::from_json_str(&document(r#"{"A": [-5, false, 0]}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity { .. }));
    }

    #[test]
    fn test_non_positive_subgroups() {
        let err = Config::from_json_str(&document(r#"{"A": [5, true, 0]}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSubgroupCount { .. }));
    }

    #[test]
    fn test_bad_special_flag() {
        let err = Config::from_json_str(&document(r#"{"A": [5, "maybe", 1]}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpecialFlag { .. }));
    }

    #[test]
    fn test_empty_categories() {
        let err = Config::from_json_str(&document("{}")).unwrap_err();
        assert!(matches!(err, ConfigError::NoCategories));
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
