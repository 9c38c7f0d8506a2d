//! Column type inference.
//!
//! Each column of a result set is classified as Numeric, Date or Text from a
//! bounded sample: the first `sample_size` rows, ignoring null and empty
//! cells. Numeric is checked before Date, so a column of `"20240105"` strings
//! is Numeric, never Date.

use crate::data::{is_numeric, to_label, ResultSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Default number of leading rows inspected per column
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// ISO date prefix (`YYYY-MM-DD...`)
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid regex"));

/// Semantic type of a result column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Date,
    Text,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Date => "date",
            ColumnType::Text => "text",
        };
        write!(f, "{}", s)
    }
}

/// Column name with its inferred type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: ColumnType,
}

/// Classify one column of a result set.
///
/// # Arguments
///
/// * `results` - The query result
/// * `column` - Column to classify
/// * `sample_size` - Number of leading rows to inspect
///
/// # Returns
///
/// - `Text` when the sample is empty (all null/empty, or no rows)
/// - `Numeric` when every sampled cell reads as a finite number
/// - `Date` when every sampled cell starts with `YYYY-MM-DD`
/// - `Text` otherwise
pub fn classify(results: &ResultSet, column: &str, sample_size: usize) -> ColumnType {
    let sample: Vec<_> = results
        .column_values(column)
        .take(sample_size)
        .filter(|value| !value.is_blank())
        .collect();

    if sample.is_empty() {
        return ColumnType::Text;
    }

    if sample.iter().all(|value| is_numeric(value)) {
        return ColumnType::Numeric;
    }

    if sample
        .iter()
        .all(|value| DATE_PREFIX.is_match(&to_label(value)))
    {
        return ColumnType::Date;
    }

    ColumnType::Text
}

/// Classify every column, in column order
pub fn classify_columns(results: &ResultSet, sample_size: usize) -> Vec<ColumnInfo> {
    results
        .columns()
        .into_iter()
        .map(|name| {
            let column_type = classify(results, name, sample_size);
            tracing::debug!(column = name, %column_type, "classified column");
            ColumnInfo {
                name: name.to_string(),
                column_type,
            }
        })
        .collect()
}

/// Column names grouped by type; each group keeps column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGroups {
    pub text: Vec<String>,
    pub numeric: Vec<String>,
    pub date: Vec<String>,
}

impl ColumnGroups {
    /// Classify and group the columns of a result set
    pub fn from_results(results: &ResultSet, sample_size: usize) -> Self {
        Self::from_columns(&classify_columns(results, sample_size))
    }

    pub fn from_columns(columns: &[ColumnInfo]) -> Self {
        let mut groups = Self::default();
        for info in columns {
            let target = match info.column_type {
                ColumnType::Text => &mut groups.text,
                ColumnType::Numeric => &mut groups.numeric,
                ColumnType::Date => &mut groups.date,
            };
            target.push(info.name.clone());
        }
        groups
    }

    /// Total number of columns
    pub fn len(&self) -> usize {
        self.text.len() + self.numeric.len() + self.date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
