//! Chart families

use serde::{Deserialize, Serialize};

/// Visualization archetype a chart is built as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFamily {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartFamily {
    /// Every family, in the order a family picker lists them
    pub const ALL: [ChartFamily; 4] = [
        ChartFamily::Bar,
        ChartFamily::Line,
        ChartFamily::Pie,
        ChartFamily::Scatter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartFamily::Bar => "bar",
            ChartFamily::Line => "line",
            ChartFamily::Pie => "pie",
            ChartFamily::Scatter => "scatter",
        }
    }

    /// Parse a family name, ignoring case; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for ChartFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChartFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "Unknown chart family '{}'. Expected one of: bar, line, pie, scatter",
                s
            )
        })
    }
}
