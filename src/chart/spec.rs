//! Chart specification types
//!
//! A [`ChartSpec`] is the renderer-agnostic result of the builder: ordered
//! category labels plus one or more styled datasets. Field names serialize in
//! camelCase so the JSON can be handed straight to Chart.js as its `data`
//! object.

use serde::{Deserialize, Serialize};

/// A built chart: labels and datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Category labels, absent for scatter charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub datasets: Vec<Dataset>,
}

/// One plotted value: a scalar or an `{x, y}` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Value(f64),
    Point { x: f64, y: f64 },
}

impl DataPoint {
    /// Scalar value, if this is not an `{x, y}` pair
    pub fn value(&self) -> Option<f64> {
        match self {
            DataPoint::Value(v) => Some(*v),
            DataPoint::Point { .. } => None,
        }
    }
}

/// Fill color: one color for the whole series, or one per point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorFill {
    Single(String),
    PerPoint(Vec<String>),
}

/// A named data series with its styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<DataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    /// Create an unstyled dataset
    pub fn new(label: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
            border_width: None,
            fill: None,
            tension: None,
        }
    }

    /// Create an unstyled dataset of scalar values
    pub fn from_values(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(label, values.into_iter().map(DataPoint::Value).collect())
    }

    pub fn with_background(mut self, fill: ColorFill) -> Self {
        self.background_color = Some(fill);
        self
    }

    pub fn with_border(mut self, color: impl Into<String>, width: u32) -> Self {
        self.border_color = Some(color.into());
        self.border_width = Some(width);
        self
    }

    /// Line styling: border color, no area fill, curve smoothing
    pub fn with_line_style(mut self, color: impl Into<String>, tension: f64) -> Self {
        self.border_color = Some(color.into());
        self.fill = Some(false);
        self.tension = Some(tension);
        self
    }

    /// Scalar values of the series; `{x, y}` pairs are skipped
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().filter_map(DataPoint::value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataset_serializes_camel_case_and_skips_unset() {
        let dataset = Dataset::from_values("count", [5.0, 2.0])
            .with_background(ColorFill::Single("#4361ee".to_string()))
            .with_border("#4361ee", 1);

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(
            value,
            json!({
                "label": "count",
                "data": [5.0, 2.0],
                "backgroundColor": "#4361ee",
                "borderColor": "#4361ee",
                "borderWidth": 1
            })
        );
    }

    #[test]
    fn test_scatter_points_and_missing_labels() {
        let spec = ChartSpec {
            labels: None,
            datasets: vec![Dataset::new(
                "x vs y",
                vec![DataPoint::Point { x: 1.0, y: 2.0 }],
            )],
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({"datasets": [{"label": "x vs y", "data": [{"x": 1.0, "y": 2.0}]}]})
        );
        assert!(spec.datasets[0].values().is_empty());
    }

    #[test]
    fn test_per_point_colors_and_line_style() {
        let dataset = Dataset::from_values("v", [1.0])
            .with_background(ColorFill::PerPoint(vec!["#fff".to_string()]))
            .with_line_style("#000", 0.3);

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["backgroundColor"], json!(["#fff"]));
        assert_eq!(value["fill"], json!(false));
        assert_eq!(value["tension"], json!(0.3));
        assert!(value.get("borderWidth").is_none());
    }

    #[test]
    fn test_spec_deserializes_from_renderer_json() {
        let spec: ChartSpec = serde_json::from_value(json!({
            "labels": ["a"],
            "datasets": [{"label": "n", "data": [3], "borderWidth": 2}]
        }))
        .unwrap();

        assert_eq!(spec.labels, Some(vec!["a".to_string()]));
        assert_eq!(spec.datasets[0].values(), vec![3.0]);
        assert_eq!(spec.datasets[0].border_width, Some(2));
    }
}
