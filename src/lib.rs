/*!
# nlsql-chart - Automatic charts for query results

Turns an arbitrary tabular query result into a chart specification that a
charting front end (Chart.js or anything with the same data shape) can draw
directly.

## Example

```rust
use nlsql_chart::{ChartEngine, ChartFamily, ResultSet};

let results = ResultSet::from_json_str(
    r#"[{"category": "a", "count": 5}, {"category": "b", "count": 2}]"#,
)
.unwrap();

let engine = ChartEngine::default();
assert_eq!(engine.detect(&results), Some(ChartFamily::Pie));

let spec = engine.build(&results, ChartFamily::Pie).unwrap();
assert_eq!(spec.labels.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
```

## Architecture

The pipeline has three stages, each depending only on the one before it:
- **Column classification** → every column becomes Numeric, Date or Text
- **Family selection** → a fixed heuristic suggests Bar, Line, Pie or Scatter
- **Spec building** → labels, datasets and styling for the chosen family

## Core Components

- [`data`] - Result set model and value coercion
- [`infer`] - Column type inference
- [`chart`] - Family detection, spec types and the spec builder
- [`config`] - Engine configuration (palette, thresholds, captions)
- [`engine`] - The `ChartEngine` facade
- [`writer`] - Renderer document writers
*/

pub mod chart;
pub mod config;
pub mod data;
pub mod engine;
pub mod infer;
pub mod writer;

// Re-export key types for convenience
pub use chart::{ChartFamily, ChartSpec, DataPoint, Dataset, Palette};
pub use config::EngineConfig;
pub use data::{CellValue, ResultRow, ResultSet};
pub use engine::{ChartEngine, ResolvedChart};
pub use infer::{ColumnGroups, ColumnInfo, ColumnType};

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output generation error: {0}")]
    WriterError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
