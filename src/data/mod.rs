//! Result set model for chart generation
//!
//! Query results arrive as an ordered list of records, one per row, each
//! mapping a column name to a scalar. Cells are kept as an explicit tagged
//! value so that numeric coercion and stringification are done in exactly
//! one place ([`coerce`]).
//!
//! # Example
//!
//! ```rust
//! use nlsql_chart::data::{CellValue, ResultSet};
//!
//! let results = ResultSet::from_json_str(r#"[{"city": "Lyon", "population": 522250}]"#).unwrap();
//! assert_eq!(results.columns(), vec!["city", "population"]);
//! assert_eq!(results.value(0, "population"), &CellValue::Number(522250.0));
//! ```

pub mod coerce;

pub use coerce::{is_numeric, number_or_zero, to_label, to_number};

use crate::{ChartError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single cell of a query result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

static NULL: CellValue = CellValue::Null;

impl CellValue {
    /// Check if the cell is null or an empty string
    ///
    /// Blank cells are left out of type inference samples.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Null),
            Value::String(s) => CellValue::Text(s),
            // Booleans stay text, so a true/false column classifies as Text
            // rather than as a 0/1 Numeric column
            Value::Bool(b) => CellValue::Text(b.to_string()),
            // Nested values have no chart meaning; keep their JSON text
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(CellValue::from)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", to_label(self))
    }
}

/// One row of a query result: column name → cell, in query column order
pub type ResultRow = IndexMap<String, CellValue>;

/// Ordered rows returned by a query
///
/// Row order is the order the query returned them in. Column order is the
/// key order of the first row; all rows are expected to share its keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a result set from already materialized rows
    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// Parse a JSON array of row objects
    ///
    /// # Errors
    ///
    /// Returns `ChartError::DataError` if the document is not valid JSON or
    /// is not an array of objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ChartError::DataError(format!("Invalid result set JSON: {}", e)))?;
        Self::from_json_value(value)
    }

    /// Convert a parsed JSON array of row objects
    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(ChartError::DataError(
                "Result set must be a JSON array of row objects".to_string(),
            ));
        };

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(map) => Ok(map
                    .into_iter()
                    .map(|(name, cell)| (name, CellValue::from(cell)))
                    .collect::<ResultRow>()),
                other => Err(ChartError::DataError(format!(
                    "Row {} is not an object: {}",
                    idx, other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// Append a row
    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in the key order of the first row
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Cell at `row` for `column`; missing rows or keys read as null
    pub fn value(&self, row: usize, column: &str) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&NULL)
    }

    /// All cells of a column, in row order
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(column).unwrap_or(&NULL))
    }
}

impl FromIterator<ResultRow> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Build a [`ResultRow`] from `name => value` pairs
///
/// ```rust
/// use nlsql_chart::row;
///
/// let r = row! { "category" => "a", "count" => 5.0 };
/// assert_eq!(r.len(), 2);
/// ```
#[macro_export]
macro_rules! row {
    ($($name:expr => $value:expr),* $(,)?) => {{
        let mut row = $crate::data::ResultRow::new();
        $(row.insert(($name).to_string(), $crate::data::CellValue::from($value));)*
        row
    }};
}
