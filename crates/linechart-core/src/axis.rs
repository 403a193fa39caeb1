// File: crates/linechart-core/src/axis.rs
// Summary: Axis labels and data ranges; autoscale over the finite extent of all series.

use crate::series::Series;

/// Fraction of the data span added on each side of an autoscaled axis.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen a degenerate range around its value so that `min < max` holds.
    /// Half-width is `max(0.5, 1e-6 * |value|)`.
    pub fn nonsingular(self) -> Self {
        let span = self.max - self.min;
        if span.abs() > 1e-12 * self.min.abs().max(self.max.abs()).max(1.0) {
            return self;
        }
        let mid = self.min;
        let half = 0.5f64.max(mid.abs() * 1e-6);
        Self { min: mid - half, max: mid + half }
    }

    /// Widen by `margin` of the span on both sides, after making a degenerate range nonsingular.
    pub fn padded(self, margin: f64) -> Self {
        let AxisRange { min, max } = self.nonsingular();
        let pad = (max - min) * margin;
        Self { min: min - pad, max: max + pad }
    }
}

/// Finite x and y extents over all series, `None` when nothing is finite.
pub fn data_extent(series: &[Series]) -> Option<(AxisRange, AxisRange)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in series {
        for (x, y) in s.points() {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !x_min.is_finite() {
        return None;
    }
    Some((AxisRange::new(x_min, x_max), AxisRange::new(y_min, y_max)))
}

/// Autoscaled (x, y) ranges with the standard margin; unit ranges when there is no finite data.
pub fn autoscale(series: &[Series]) -> (AxisRange, AxisRange) {
    match data_extent(series) {
        Some((x, y)) => (x.padded(AUTOSCALE_MARGIN), y.padded(AUTOSCALE_MARGIN)),
        None => (AxisRange::new(0.0, 1.0), AxisRange::new(0.0, 1.0)),
    }
}
