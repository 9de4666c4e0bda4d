//! Buddy-group labels from the auxiliary dataset.

use std::collections::HashMap;

use super::types::cell;
use crate::config::ColumnBindings;
use crate::error::DataIntegrityError;
use crate::table::Table;

/// Identifier → buddy-group label.
///
/// Incomplete data is expected: a person without a label is simply not
/// partitioned. Blank labels count as absent, and when an identifier
/// appears more than once the first label wins.
///
/// # Examples
///
/// ```
/// use u_assign::roster::BuddyGroups;
///
/// let groups: BuddyGroups = [("1", "north"), ("2", "south"), ("1", "east")]
///     .into_iter()
///     .collect();
/// assert_eq!(groups.label("1"), Some("north"));
/// assert_eq!(groups.label("3"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuddyGroups {
    labels: HashMap<String, String>,
}

impl BuddyGroups {
    /// Reads the auxiliary table using the `extsidK` / `extBK` bindings.
    pub fn from_table(table: &Table, bindings: &ColumnBindings) -> Result<Self, DataIntegrityError> {
        const TABLE: &str = "auxiliary";
        let id_col = table.require_column(TABLE, &bindings.external_id)?;
        let label_col = table.require_column(TABLE, &bindings.buddy_group)?;

        let mut groups = Self::default();
        let mut ignored = 0usize;
        for row in table.rows() {
            if !groups.insert(cell(row, id_col), cell(row, label_col)) {
                ignored += 1;
            }
        }
        if ignored > 0 {
            tracing::debug!(ignored, "auxiliary rows without usable buddy-group label");
        }
        Ok(groups)
    }

    /// Records a label. Returns `false` if the row was ignored (blank
    /// field or identifier already present).
    fn insert(&mut self, id: &str, label: &str) -> bool {
        if id.is_empty() || label.is_empty() || self.labels.contains_key(id) {
            return false;
        }
        self.labels.insert(id.to_string(), label.to_string());
        true
    }

    /// Label for `id`, if known.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Number of labelled identifiers.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<I: AsRef<str>, L: AsRef<str>> FromIterator<(I, L)> for BuddyGroups {
    fn from_iter<T: IntoIterator<Item = (I, L)>>(iter: T) -> Self {
        let mut groups = Self::default();
        for (id, label) in iter {
            groups.insert(id.as_ref().trim(), label.as_ref().trim());
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> ColumnBindings {
        ColumnBindings {
            external_id: "ext".into(),
            buddy_group: "bg".into(),
            ..ColumnBindings::default()
        }
    }

    #[test]
    fn test_from_table() {
        let table = Table::from_json_records(
            r#"[
                {"ext": 1, "bg": "red"},
                {"ext": 2, "bg": ""},
                {"ext": 1, "bg": "blue"},
                {"ext": 3, "bg": "blue", "other": "x"}
            ]"#,
        )
        .unwrap();
        let groups = BuddyGroups::from_table(&table, &bindings()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.label("1"), Some("red"));
        assert_eq!(groups.label("2"), None);
        assert_eq!(groups.label("3"), Some("blue"));
    }

    #[test]
    fn test_missing_column() {
        let table = Table::from_json_records(r#"[{"ext": 1}]"#).unwrap();
        let err = BuddyGroups::from_table(&table, &bindings()).unwrap_err();
        assert!(matches!(
            err,
            DataIntegrityError::MissingColumn { table: "auxiliary", .. }
        ));
    }
}
