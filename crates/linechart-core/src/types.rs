// File: crates/linechart-core/src/types.rs
// Summary: Shared layout constants (paddings, in points) and figure insets.

/// Blank border around the tight bounding box (0.1 in).
pub const FIGURE_PAD_PT: f32 = 7.2;
/// Gap between a tick and its label.
pub const TICK_LABEL_PAD_PT: f32 = 3.5;
/// Gap between tick labels and the axis label.
pub const AXIS_LABEL_PAD_PT: f32 = 4.0;
/// Gap between the plot area and the title.
pub const TITLE_PAD_PT: f32 = 6.0;

/// Figure margins around the plot area, in device units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}
