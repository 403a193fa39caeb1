// File: crates/linechart-core/src/error.rs
// Summary: Error taxonomy for loading, planning and rendering charts.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Input file is missing or cannot be opened.
    #[error("data source not found: {}", path.display())]
    DataSourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("column '{column}' not found (available: {})", available.join(", "))]
    ColumnNotFound { column: String, available: Vec<String> },

    #[error("unknown style bundle '{name}' (known: {})", available.join(", "))]
    StyleBundleUnknown { name: String, available: Vec<String> },

    /// A cell could not be parsed as a number. `row` is 1-based and excludes the header.
    #[error("invalid value '{value}' in column '{column}' at row {row}")]
    InvalidValue { column: String, row: usize, value: String },

    #[error("expected {expected} legend labels, got {got}")]
    LabelCountMismatch { expected: usize, got: usize },

    #[error("series '{name}' has no points")]
    EmptySeries { name: String },

    #[error("series '{name}' has {x_len} x values but {y_len} y values")]
    SeriesLengthMismatch { name: String, x_len: usize, y_len: usize },

    #[error("series name '{name}' is used more than once")]
    DuplicateSeries { name: String },

    #[error("chart request contains no series")]
    EmptyRequest,

    #[error("unsupported output format for '{}' (use png, jpg, jpeg, svg or pdf)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to create drawing surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode {format} image")]
    Encode { format: &'static str },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
