//! Chart types and chart generation
//!
//! This module contains everything between a classified result set and a
//! drawable chart description.
//!
//! # Architecture
//!
//! - `family` - The `ChartFamily` enum (bar, line, pie, scatter)
//! - `detect` - Default family selection from column types
//! - `build` - `ChartSpec` construction for a given family
//! - `spec` - Output types: `ChartSpec`, `Dataset`, `DataPoint`
//! - `palette` - Series colors and color parsing

pub mod build;
pub mod detect;
pub mod family;
pub mod palette;
pub mod spec;

// Re-export all types for convenience
pub use build::{build, build_named};
pub use detect::{detect, detect_from_groups};
pub use family::ChartFamily;
pub use palette::Palette;
pub use spec::{ChartSpec, ColorFill, DataPoint, Dataset};
