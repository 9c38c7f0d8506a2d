//! Default chart family selection
//!
//! Picks a chart family from the column type counts of a result set. Rules
//! are tried in order and the first match wins:
//!
//! | # | Columns                                   | Family  |
//! |---|-------------------------------------------|---------|
//! | 1 | exactly 1 date, ≥1 numeric                | line    |
//! | 2 | exactly 1 text, exactly 1 numeric, few rows | pie   |
//! | 3 | ≥1 text, ≥1 numeric                       | bar     |
//! | 4 | exactly 2 numeric, nothing else           | scatter |
//! | 5 | ≥1 text, no numeric                       | bar (frequency count) |
//!
//! Anything else has no default family. The result is only a suggestion;
//! callers may build any family they like.

use super::ChartFamily;
use crate::config::EngineConfig;
use crate::data::ResultSet;
use crate::infer::ColumnGroups;

/// Suggest a chart family for a result set; `None` for empty results or
/// column shapes with no sensible default.
pub fn detect(results: &ResultSet, config: &EngineConfig) -> Option<ChartFamily> {
    if results.is_empty() {
        return None;
    }

    let groups = ColumnGroups::from_results(results, config.sample_size);
    let family = detect_from_groups(&groups, results.len(), config.pie_max_rows);
    tracing::debug!(
        rows = results.len(),
        text = groups.text.len(),
        numeric = groups.numeric.len(),
        date = groups.date.len(),
        family = ?family,
        "detected chart family"
    );
    family
}

/// Apply the selection rules to already grouped columns
pub fn detect_from_groups(
    groups: &ColumnGroups,
    row_count: usize,
    pie_max_rows: usize,
) -> Option<ChartFamily> {
    let text = groups.text.len();
    let numeric = groups.numeric.len();
    let date = groups.date.len();

    if date == 1 && numeric >= 1 {
        return Some(ChartFamily::Line);
    }
    if text == 1 && numeric == 1 && row_count <= pie_max_rows {
        return Some(ChartFamily::Pie);
    }
    if text >= 1 && numeric >= 1 {
        return Some(ChartFamily::Bar);
    }
    if numeric == 2 && text == 0 && date == 0 {
        return Some(ChartFamily::Scatter);
    }
    if text >= 1 && numeric == 0 {
        return Some(ChartFamily::Bar);
    }
    None
}
