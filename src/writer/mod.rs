//! Output writer abstraction layer
//!
//! The writer module turns built charts into documents a specific charting
//! front end can load directly.
//!
//! # Architecture
//!
//! All writers implement the `Writer` trait, which provides:
//! - Family + ChartSpec → Output conversion
//! - Resolved chart → Output, failing when nothing could be built
//!
//! # Example
//!
//! ```rust
//! use nlsql_chart::writer::{ChartJsWriter, Writer};
//! use nlsql_chart::{ChartEngine, ResultSet};
//!
//! let results = ResultSet::from_json_str(r#"[{"name": "a", "n": 1}]"#).unwrap();
//! let resolved = ChartEngine::default().resolve(&results, None);
//!
//! let json = ChartJsWriter::new().render(&resolved).unwrap();
//! assert!(json.contains("\"type\":\"pie\""));
//! ```

use crate::chart::{ChartFamily, ChartSpec};
use crate::engine::ResolvedChart;
use crate::{ChartError, Result};

pub mod chartjs;

pub use chartjs::ChartJsWriter;

/// Trait for chart output writers
///
/// # Associated Types
///
/// * `Output` - The type returned by `write()` and `render()`, e.g. `String`
///   for text documents.
pub trait Writer {
    /// The output type produced by this writer.
    type Output;

    /// Generate output for a chart of the given family
    ///
    /// # Errors
    ///
    /// Returns `ChartError::WriterError` if output generation fails.
    fn write(&self, family: ChartFamily, spec: &ChartSpec) -> Result<Self::Output>;

    /// Render a resolved chart
    ///
    /// # Errors
    ///
    /// Returns `ChartError::WriterError` if the chart could not be built for
    /// its family, or if output generation fails.
    fn render(&self, chart: &ResolvedChart) -> Result<Self::Output> {
        let spec = chart.spec.as_ref().ok_or_else(|| {
            ChartError::WriterError(format!(
                "Cannot build a {} chart from these results",
                chart.family
            ))
        })?;
        self.write(chart.family, spec)
    }
}
