// File: crates/linechart-core/src/series.rs
// Summary: Named (x, y) series with an optional legend label.
// Notes:
// - Constructors enforce `x.len() == y.len() >= 1`; fields stay private so a
//   built series cannot break that invariant afterwards.
// - Non-finite values are kept and render as gaps in the line.

use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
    label: Option<String>,
}

impl Series {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(ChartError::SeriesLengthMismatch { name, x_len: x.len(), y_len: y.len() });
        }
        if x.is_empty() {
            return Err(ChartError::EmptySeries { name });
        }
        Ok(Self { name, x, y, label: None })
    }

    /// Build from `(x, y)` pairs.
    pub fn from_points(name: impl Into<String>, points: &[(f64, f64)]) -> Result<Self> {
        let (x, y) = points.iter().copied().unzip();
        Self::new(name, x, y)
    }

    /// Set the legend label shown instead of the name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Text used in the legend: the label when present, else the name.
    pub fn legend_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
