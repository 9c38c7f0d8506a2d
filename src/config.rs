//! Engine configuration
//!
//! Everything the chart engine treats as fixed (palette, sampling and pie
//! thresholds, styling constants and generated dataset captions) lives in
//! [`EngineConfig`]. The defaults reproduce the stock chart look; a JSON
//! document can override any subset of fields:
//!
//! ```json
//! { "palette": ["#1b9e77", "#d95f02", "#7570b3"], "pieMaxRows": 6 }
//! ```

use crate::chart::palette::{color_to_hex, Palette};
use crate::infer::DEFAULT_SAMPLE_SIZE;
use crate::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Placeholder replaced by the column name in [`EngineConfig::frequency_caption`]
pub const COLUMN_PLACEHOLDER: &str = "{column}";

/// Immutable settings shared by the selector and the builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EngineConfig {
    /// Series colors, cycled by index
    pub palette: Palette,
    /// Leading rows inspected when classifying a column
    pub sample_size: usize,
    /// Largest row count still charted as a pie by default
    pub pie_max_rows: usize,
    /// Curve smoothing of line datasets
    pub line_tension: f64,
    /// Alpha of the translucent background color of line datasets
    pub line_fill_alpha: f32,
    /// Separator drawn between pie slices
    pub pie_border_color: String,
    pub pie_border_width: u32,
    pub bar_border_width: u32,
    /// Caption of the frequency-count dataset; `{column}` is replaced by the
    /// counted column's name
    pub frequency_caption: String,
    /// Caption of the synthetic line dataset used when no numeric column exists
    pub cumulative_caption: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            pie_max_rows: 10,
            line_tension: 0.3,
            line_fill_alpha: 0x33 as f32 / 255.0,
            pie_border_color: "#ffffff".to_string(),
            pie_border_width: 2,
            bar_border_width: 1,
            frequency_caption: format!("Count by {}", COLUMN_PLACEHOLDER),
            cumulative_caption: "Cumulative count".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON configuration document; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::ConfigError` on malformed JSON, unknown fields,
    /// invalid colors or out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ChartError::ConfigError(format!("Invalid configuration: {}", e)))?;
        config.validated()
    }

    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ChartError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded engine configuration");
        Self::from_json_str(&contents)
    }

    /// Check value ranges and normalize colors to hex
    pub fn validated(mut self) -> Result<Self> {
        if self.sample_size == 0 {
            return Err(ChartError::ConfigError(
                "sampleSize must be at least 1".to_string(),
            ));
        }
        if !self.line_tension.is_finite() || self.line_tension < 0.0 {
            return Err(ChartError::ConfigError(format!(
                "lineTension must be a non-negative number, got {}",
                self.line_tension
            )));
        }
        if !(0.0..=1.0).contains(&self.line_fill_alpha) {
            return Err(ChartError::ConfigError(format!(
                "lineFillAlpha must be between 0 and 1, got {}",
                self.line_fill_alpha
            )));
        }
        self.pie_border_color =
            color_to_hex(&self.pie_border_color).map_err(ChartError::ConfigError)?;
        Ok(self)
    }

    /// Caption of the frequency dataset for `column`
    pub fn frequency_label(&self, column: &str) -> String {
        self.frequency_caption.replace(COLUMN_PLACEHOLDER, column)
    }
}
