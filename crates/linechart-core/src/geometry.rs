// File: crates/linechart-core/src/geometry.rs
// Summary: Lightweight float rectangle used for plot and legend layout.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn to_skia(self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
