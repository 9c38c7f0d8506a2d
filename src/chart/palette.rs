//! Chart color palette
//!
//! Provides the fixed, cyclable list of series colors and the color parsing
//! helpers used to validate and derive colors from it.

use serde::{Deserialize, Serialize};

/// Default series colors, in cycling order
pub const DEFAULT_COLORS: [&str; 10] = [
    "#4361ee", "#3a0ca3", "#7209b7", "#f72585", "#4cc9f0", "#06d6a0", "#ffd166", "#ef476f",
    "#118ab2", "#073b4c",
];

// =============================================================================
// Color Utilities
// =============================================================================

/// Convert a CSS color name/value to hex format.
/// Supports named colors (e.g., "red"), hex (#FF0000), rgb(), rgba(), hsl(), etc.
pub fn color_to_hex(value: &str) -> Result<String, String> {
    csscolorparser::parse(value)
        .map(|c| c.to_css_hex())
        .map_err(|e| format!("Invalid color '{}': {}", value, e))
}

/// Same color with the given alpha (0.0..=1.0), as `#rrggbbaa`.
pub fn with_alpha(value: &str, alpha: f32) -> Result<String, String> {
    let mut color =
        csscolorparser::parse(value).map_err(|e| format!("Invalid color '{}': {}", value, e))?;
    color.a = alpha.clamp(0.0, 1.0) as _;
    Ok(color.to_css_hex())
}

// =============================================================================
// Palette
// =============================================================================

/// Ordered list of colors, indexed modulo its length
///
/// Always holds at least one color; construct through [`Palette::new`] to
/// validate custom colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build a palette from CSS colors, normalized to hex.
    ///
    /// # Example
    /// ```
    /// use nlsql_chart::chart::Palette;
    ///
    /// let palette = Palette::new(["red", "#00F"]).unwrap();
    /// assert_eq!(palette.color(3), "#0000ff");
    /// ```
    pub fn new<I, S>(colors: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = colors
            .into_iter()
            .map(|c| color_to_hex(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if colors.is_empty() {
            return Err("A palette needs at least one color".to_string());
        }

        Ok(Self { colors })
    }

    /// Color at `index`, cycling through the palette
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// One color per point for `count` points
    pub fn cycle(&self, count: usize) -> Vec<String> {
        (0..count).map(|i| self.color(i).to_string()).collect()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = String;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
