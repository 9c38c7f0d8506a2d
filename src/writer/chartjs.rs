//! Chart.js JSON writer implementation
//!
//! Wraps a [`ChartSpec`] into a complete Chart.js configuration object:
//!
//! ```json
//! {
//!   "type": "bar",
//!   "data": { "labels": [...], "datasets": [...] },
//!   "options": { "responsive": true, "maintainAspectRatio": true,
//!                "plugins": { "legend": { "position": "top" } } }
//! }
//! ```
//!
//! The document can be passed as-is to `new Chart(canvas, config)`.

use crate::chart::{ChartFamily, ChartSpec};
use crate::writer::Writer;
use crate::{ChartError, Result};
use serde_json::{json, Value};

/// Where the legend is drawn relative to the chart area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl LegendPosition {
    fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::Top => "top",
            LegendPosition::Bottom => "bottom",
            LegendPosition::Left => "left",
            LegendPosition::Right => "right",
        }
    }
}

/// Chart.js configuration writer
pub struct ChartJsWriter {
    pretty: bool,
    responsive: bool,
    legend: LegendPosition,
}

impl ChartJsWriter {
    /// Create a writer producing compact, responsive documents with the
    /// legend on top
    pub fn new() -> Self {
        Self {
            pretty: false,
            responsive: true,
            legend: LegendPosition::Top,
        }
    }

    /// Pretty-print the JSON output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    /// Build the configuration document as a JSON value
    pub fn to_value(&self, family: ChartFamily, spec: &ChartSpec) -> Result<Value> {
        let data = serde_json::to_value(spec).map_err(|e| {
            ChartError::WriterError(format!("Failed to serialize chart data: {}", e))
        })?;

        Ok(json!({
            "type": family.as_str(),
            "data": data,
            "options": {
                "responsive": self.responsive,
                "maintainAspectRatio": true,
                "plugins": {
                    "legend": { "position": self.legend.as_str() }
                }
            }
        }))
    }
}

impl Default for ChartJsWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for ChartJsWriter {
    type Output = String;

    fn write(&self, family: ChartFamily, spec: &ChartSpec) -> Result<String> {
        let value = self.to_value(family, spec)?;
        let output = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        output.map_err(|e| ChartError::WriterError(format!("Failed to write JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Dataset;
    use crate::engine::ResolvedChart;

    fn simple_spec() -> ChartSpec {
        ChartSpec {
            labels: Some(vec!["a".to_string(), "b".to_string()]),
            datasets: vec![Dataset::from_values("count", [5.0, 2.0])],
        }
    }

    #[test]
    fn test_document_shape() {
        let writer = ChartJsWriter::new();
        let json = writer.write(ChartFamily::Pie, &simple_spec()).unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(doc["type"], "pie");
        assert_eq!(doc["data"]["labels"], json!(["a", "b"]));
        assert_eq!(doc["data"]["datasets"][0]["data"], json!([5.0, 2.0]));
        assert_eq!(doc["options"]["responsive"], true);
        assert_eq!(doc["options"]["maintainAspectRatio"], true);
        assert_eq!(doc["options"]["plugins"]["legend"]["position"], "top");
    }

    #[test]
    fn test_options() {
        let writer = ChartJsWriter::new()
            .responsive(false)
            .legend(LegendPosition::Right);
        let doc = writer.to_value(ChartFamily::Bar, &simple_spec()).unwrap();

        assert_eq!(doc["options"]["responsive"], false);
        assert_eq!(doc["options"]["plugins"]["legend"]["position"], "right");
    }

    #[test]
    fn test_pretty_output() {
        let compact = ChartJsWriter::new()
            .write(ChartFamily::Bar, &simple_spec())
            .unwrap();
        let pretty = ChartJsWriter::new()
            .pretty(true)
            .write(ChartFamily::Bar, &simple_spec())
            .unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn test_render_unbuildable_chart_fails() {
        let chart = ResolvedChart {
            family: ChartFamily::Scatter,
            detected: None,
            spec: None,
        };
        let err = ChartJsWriter::new().render(&chart).unwrap_err();
        assert!(err.to_string().contains("scatter"));
    }
}
