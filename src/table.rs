//! Minimal in-memory table.
//!
//! Rosters, buddy-group lookups, and results all travel as a [`Table`]:
//! a header row plus string cells. Spreadsheet parsing lives outside the
//! crate; [`Table::from_json_records`] accepts the array-of-objects shape
//! most exporters emit.

use serde_json::{Map, Number, Value};

use crate::error::DataIntegrityError;

/// A rectangular table of text cells with named columns.
///
/// # Examples
///
/// ```
/// use u_assign::table::Table;
///
/// let mut table = Table::new(vec!["Name".into(), "SID".into()]);
/// table.push_row(vec!["Ada".into(), "1".into()]).unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.column_index("SID"), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given header.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from rows already known to match the header.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Appends a row. The row must have one cell per column.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), DataIntegrityError> {
        if row.len() != self.columns.len() {
            return Err(DataIntegrityError::RaggedRow {
                table: "input",
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`column_index`](Self::column_index), but reports a missing
    /// column as a data integrity error against `table`.
    pub fn require_column(
        &self,
        table: &'static str,
        name: &str,
    ) -> Result<usize, DataIntegrityError> {
        self.column_index(name)
            .ok_or_else(|| DataIntegrityError::MissingColumn {
                table,
                column: name.to_string(),
            })
    }

    /// Cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Parses a JSON array of objects.
    ///
    /// The header is the union of keys in first-seen order. Missing keys
    /// and `null` become blank cells; numbers and booleans are rendered as
    /// text, with integral floats written without a fractional part so
    /// that `1234.0` and `1234` identify the same person.
    pub fn from_json_records(json: &str) -> Result<Self, DataIntegrityError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DataIntegrityError::MalformedTable(e.to_string()))?;
        let Value::Array(records) = value else {
            return Err(DataIntegrityError::MalformedTable(
                "expected a JSON array of records".into(),
            ));
        };

        let mut objects: Vec<Map<String, Value>> = Vec::with_capacity(records.len());
        let mut columns: Vec<String> = Vec::new();
        for (i, record) in records.into_iter().enumerate() {
            let Value::Object(map) = record else {
                return Err(DataIntegrityError::MalformedTable(format!(
                    "record {i} is not an object"
                )));
            };
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
            objects.push(map);
        }

        let rows = objects
            .iter()
            .map(|map| {
                columns
                    .iter()
                    .map(|c| map.get(c).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    /// Renders the table as a JSON array of objects, one per row.
    pub fn to_json_records(&self) -> Value {
        Value::Array(
            self.rows
                .iter()
                .map(|row| {
                    let map: Map<String, Value> = self
                        .columns
                        .iter()
                        .cloned()
                        .zip(row.iter().cloned().map(Value::String))
                        .collect();
                    Value::Object(map)
                })
                .collect(),
        )
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}
