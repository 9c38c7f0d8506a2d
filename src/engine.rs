//! Chart engine facade
//!
//! [`ChartEngine`] owns an [`EngineConfig`] and exposes the whole pipeline:
//! column classification, default family detection and spec building. It
//! holds no mutable state, so one engine can be shared freely across threads.

use crate::chart::{self, ChartFamily, ChartSpec};
use crate::config::EngineConfig;
use crate::data::ResultSet;
use crate::infer::{self, ColumnGroups, ColumnInfo, ColumnType};
use serde::Serialize;

/// Family used when there is neither an override nor a detected family
pub const FALLBACK_FAMILY: ChartFamily = ChartFamily::Bar;

/// Outcome of [`ChartEngine::resolve`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedChart {
    /// Family the chart was built as
    pub family: ChartFamily,
    /// Family suggested by detection, if any
    pub detected: Option<ChartFamily>,
    /// `None` when the result set cannot be drawn as `family`
    pub spec: Option<ChartSpec>,
}

impl ResolvedChart {
    pub fn is_drawable(&self) -> bool {
        self.spec.is_some()
    }
}

/// Chart generation pipeline over a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ChartEngine {
    config: EngineConfig,
}

impl ChartEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Classify one column
    pub fn classify(&self, results: &ResultSet, column: &str) -> ColumnType {
        infer::classify(results, column, self.config.sample_size)
    }

    /// Classify every column, in column order
    pub fn classify_columns(&self, results: &ResultSet) -> Vec<ColumnInfo> {
        infer::classify_columns(results, self.config.sample_size)
    }

    /// Columns grouped by type
    pub fn column_groups(&self, results: &ResultSet) -> ColumnGroups {
        ColumnGroups::from_results(results, self.config.sample_size)
    }

    /// Suggested chart family
    pub fn detect(&self, results: &ResultSet) -> Option<ChartFamily> {
        chart::detect(results, &self.config)
    }

    /// Build a chart of the given family
    pub fn build(&self, results: &ResultSet, family: ChartFamily) -> Option<ChartSpec> {
        chart::build(results, family, &self.config)
    }

    /// Build a chart from a family name; unknown names yield `None`
    pub fn build_named(&self, results: &ResultSet, family: &str) -> Option<ChartSpec> {
        chart::build_named(results, family, &self.config)
    }

    /// Pick the active family and build it.
    ///
    /// The active family is `requested` if given, else the detected family,
    /// else [`FALLBACK_FAMILY`]. The spec is `None` when the active family
    /// cannot be drawn from these results.
    pub fn resolve(&self, results: &ResultSet, requested: Option<ChartFamily>) -> ResolvedChart {
        let detected = self.detect(results);
        let family = requested.or(detected).unwrap_or(FALLBACK_FAMILY);
        let spec = self.build(results, family);

        if spec.is_none() {
            tracing::info!(%family, rows = results.len(), "cannot build chart");
        }

        ResolvedChart {
            family,
            detected,
            spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn status_results() -> ResultSet {
        vec![
            row! { "status" => "open" },
            row! { "status" => "open" },
            row! { "status" => "closed" },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChartEngine>();
    }

    #[test]
    fn test_resolve_uses_detected_family() {
        let resolved = ChartEngine::default().resolve(&status_results(), None);
        assert_eq!(resolved.family, ChartFamily::Bar);
        assert_eq!(resolved.detected, Some(ChartFamily::Bar));
        assert!(resolved.is_drawable());
    }

    #[test]
    fn test_resolve_override_wins() {
        let resolved = ChartEngine::default().resolve(&status_results(), Some(ChartFamily::Line));
        assert_eq!(resolved.family, ChartFamily::Line);
        assert_eq!(resolved.detected, Some(ChartFamily::Bar));
        assert_eq!(resolved.spec.unwrap().datasets[0].values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_resolve_falls_back_to_bar() {
        let results: ResultSet = vec![row! { "total" => 42.0 }].into_iter().collect();
        let resolved = ChartEngine::default().resolve(&results, None);

        assert_eq!(resolved.detected, None);
        assert_eq!(resolved.family, ChartFamily::Bar);
        // A lone numeric column has no label column to draw bars against
        assert!(!resolved.is_drawable());
    }

    #[test]
    fn test_classify_uses_configured_sample_size() {
        let mut results: ResultSet = vec![row! { "v" => 1.0 }, row! { "v" => 2.0 }]
            .into_iter()
            .collect();
        results.push(row! { "v" => "three" });

        let narrow = ChartEngine::new(EngineConfig {
            sample_size: 2,
            ..EngineConfig::default()
        });
        assert_eq!(narrow.classify(&results, "v"), ColumnType::Numeric);
        assert_eq!(ChartEngine::default().classify(&results, "v"), ColumnType::Text);
    }

    #[test]
    fn test_two_numeric_columns_scatter_point_count() {
        let results: ResultSet = (0..7)
            .map(|i| row! { "x" => i as f64, "y" => format!("{}", i * i) })
            .collect();
        let engine = ChartEngine::default();

        assert_eq!(engine.detect(&results), Some(ChartFamily::Scatter));
        let spec = engine.build(&results, ChartFamily::Scatter).unwrap();
        assert_eq!(spec.datasets.len(), 1);
        assert_eq!(spec.datasets[0].data.len(), 7);
    }

    #[test]
    fn test_build_named_unknown_family() {
        let engine = ChartEngine::default();
        assert!(engine.build_named(&status_results(), "radar").is_none());
        assert!(engine.build_named(&status_results(), "bar").is_some());
    }

    #[test]
    fn test_column_groups() {
        let results: ResultSet = vec![row! { "name" => "a", "score" => 1.0 }]
            .into_iter()
            .collect();
        let groups = ChartEngine::default().column_groups(&results);
        assert_eq!(groups.text, vec!["name"]);
        assert_eq!(groups.numeric, vec!["score"]);
        assert!(groups.date.is_empty());
    }
}
