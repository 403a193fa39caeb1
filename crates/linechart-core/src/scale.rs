// File: crates/linechart-core/src/scale.rs
// Summary: Linear data-to-screen transform for one axis.

use crate::axis::AxisRange;

/// Maps `[vmin, vmax]` onto `[px_start, px_end]`.
/// For a y axis pass `px_start = bottom`, `px_end = top` so values grow upward.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let range = AxisRange::new(vmin, vmax).nonsingular();
        Self { vmin: range.min, vmax: range.max, px_start, px_end }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
}
