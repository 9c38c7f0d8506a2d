//! Chart specification builder
//!
//! Turns a result set and a chart family into a [`ChartSpec`]. Every family
//! has its own column requirements; when they are not met the builder returns
//! `None` and the caller shows a "cannot build this chart" fallback. Cells
//! that do not read as numbers plot as 0 rather than failing the build.
//!
//! # Family layouts
//!
//! - **bar / pie**: first text column as labels, one dataset per numeric
//!   column; with no numeric column, a frequency count of the first text
//!   column
//! - **line**: first date column (else first text column) as labels, one
//!   dataset per numeric column; with no numeric column, a cumulative count
//! - **scatter**: first two numeric columns as `{x, y}` pairs

use super::palette::with_alpha;
use super::spec::{ColorFill, ChartSpec, DataPoint, Dataset};
use super::ChartFamily;
use crate::config::EngineConfig;
use crate::data::{number_or_zero, to_label, CellValue, ResultSet};
use crate::infer::ColumnGroups;
use indexmap::IndexMap;

/// Build the chart specification for `family`, or `None` when the result set
/// cannot be drawn that way.
pub fn build(results: &ResultSet, family: ChartFamily, config: &EngineConfig) -> Option<ChartSpec> {
    if results.is_empty() {
        return None;
    }

    let groups = ColumnGroups::from_results(results, config.sample_size);
    let spec = match family {
        ChartFamily::Bar | ChartFamily::Pie => build_categorical(results, &groups, family, config),
        ChartFamily::Line => build_line(results, &groups, config),
        ChartFamily::Scatter => build_scatter(results, &groups, config),
    };

    if spec.is_none() {
        tracing::debug!(%family, "result set is incompatible with chart family");
    }
    spec
}

/// Build by family name; unknown names yield `None`
pub fn build_named(results: &ResultSet, family: &str, config: &EngineConfig) -> Option<ChartSpec> {
    match ChartFamily::from_name(family) {
        Some(family) => build(results, family, config),
        None => {
            tracing::debug!(family, "unknown chart family");
            None
        }
    }
}

// =============================================================================
// Bar / Pie
// =============================================================================

fn build_categorical(
    results: &ResultSet,
    groups: &ColumnGroups,
    family: ChartFamily,
    config: &EngineConfig,
) -> Option<ChartSpec> {
    let label_column = groups.text.first()?;

    if groups.numeric.is_empty() {
        tracing::trace!(column = %label_column, "no numeric column, counting frequencies");
        return Some(build_frequency(results, label_column, family, config));
    }

    let labels: Vec<String> = results.column_values(label_column).map(to_label).collect();
    let datasets = groups
        .numeric
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let dataset = Dataset::from_values(column.as_str(), numeric_values(results, column));
            style_categorical(dataset, family, idx, labels.len(), config)
        })
        .collect();

    Some(ChartSpec {
        labels: Some(labels),
        datasets,
    })
}

fn build_frequency(
    results: &ResultSet,
    column: &str,
    family: ChartFamily,
    config: &EngineConfig,
) -> ChartSpec {
    let counts = frequency_counts(results.column_values(column));
    let (labels, values): (Vec<String>, Vec<f64>) = counts
        .into_iter()
        .map(|(label, count)| (label, count as f64))
        .unzip();

    let dataset = Dataset::from_values(config.frequency_label(column), values);
    let dataset = style_categorical(dataset, family, 0, labels.len(), config);

    ChartSpec {
        labels: Some(labels),
        datasets: vec![dataset],
    }
}

/// Count distinct labels (null counts as `""`), most frequent first; ties
/// keep first-seen order.
fn frequency_counts<'a>(values: impl Iterator<Item = &'a CellValue>) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        let label = match value {
            CellValue::Null => String::new(),
            other => to_label(other),
        };
        *counts.entry(label).or_insert(0) += 1;
    }

    // Stable sort keeps first-seen order among equal counts
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn style_categorical(
    dataset: Dataset,
    family: ChartFamily,
    index: usize,
    points: usize,
    config: &EngineConfig,
) -> Dataset {
    let palette = &config.palette;
    if family == ChartFamily::Pie {
        dataset
            .with_background(ColorFill::PerPoint(palette.cycle(points)))
            .with_border(config.pie_border_color.as_str(), config.pie_border_width)
    } else {
        let color = palette.color(index);
        dataset
            .with_background(ColorFill::Single(color.to_string()))
            .with_border(color, config.bar_border_width)
    }
}

// =============================================================================
// Line
// =============================================================================

fn build_line(results: &ResultSet, groups: &ColumnGroups, config: &EngineConfig) -> Option<ChartSpec> {
    let x_column = groups.date.first().or_else(|| groups.text.first())?;
    let labels: Vec<String> = results.column_values(x_column).map(to_label).collect();

    let datasets = if groups.numeric.is_empty() {
        tracing::trace!(column = %x_column, "no numeric column, plotting cumulative count");
        let cumulative = (1..=labels.len()).map(|i| i as f64);
        vec![style_line(
            Dataset::from_values(config.cumulative_caption.as_str(), cumulative),
            0,
            config,
        )]
    } else {
        groups
            .numeric
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let dataset = Dataset::from_values(column.as_str(), numeric_values(results, column));
                style_line(dataset, idx, config)
            })
            .collect()
    };

    Some(ChartSpec {
        labels: Some(labels),
        datasets,
    })
}

fn style_line(dataset: Dataset, index: usize, config: &EngineConfig) -> Dataset {
    let color = config.palette.color(index);
    // Palette colors are validated hex, so the alpha variant cannot fail
    let background = with_alpha(color, config.line_fill_alpha).unwrap_or_else(|_| color.to_string());
    dataset
        .with_background(ColorFill::Single(background))
        .with_line_style(color, config.line_tension)
}

// =============================================================================
// Scatter
// =============================================================================

fn build_scatter(
    results: &ResultSet,
    groups: &ColumnGroups,
    config: &EngineConfig,
) -> Option<ChartSpec> {
    let [x_column, y_column, ..] = groups.numeric.as_slice() else {
        return None;
    };

    let points = (0..results.len())
        .map(|row| DataPoint::Point {
            x: number_or_zero(results.value(row, x_column)),
            y: number_or_zero(results.value(row, y_column)),
        })
        .collect();

    let dataset = Dataset::new(format!("{} vs {}", x_column, y_column), points)
        .with_background(ColorFill::Single(config.palette.color(0).to_string()));

    Some(ChartSpec {
        labels: None,
        datasets: vec![dataset],
    })
}

fn numeric_values<'a>(results: &'a ResultSet, column: &'a str) -> impl Iterator<Item = f64> + 'a {
    results.column_values(column).map(number_or_zero)
}
