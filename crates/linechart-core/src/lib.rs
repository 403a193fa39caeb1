// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports style bundles, series/data loading and chart rendering.

pub mod assign;
pub mod axis;
pub mod chart;
pub mod data;
pub mod draw;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod scale;
pub mod series;
pub mod style;
pub mod text;
pub mod types;

pub use assign::{assign_styles, RenderWarning, SeriesStyle};
pub use axis::AxisRange;
pub use chart::{
    plan, render, render_five_line_chart, render_three_line_chart, render_to_bytes, render_with_style,
    ChartPlan, ChartRequest, RenderReport,
};
pub use data::DataSource;
pub use error::{ChartError, Result};
pub use format::OutputFormat;
pub use series::Series;
pub use style::{registry, LegendLocation, LineStyle, Marker, StyleBundle, StyleRegistry};
pub use text::TextShaper;
