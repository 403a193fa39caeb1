// File: crates/linechart-core/src/legend.rs
// Summary: Legend box layout and corner placement (fixed corner or least-occluding "best").

use crate::geometry::RectF;
use crate::style::LegendLocation;

// Spacing in multiples of the legend font size.
pub const BORDER_PAD: f32 = 0.4;
pub const LABEL_SPACING: f32 = 0.5;
pub const HANDLE_TEXT_PAD: f32 = 0.8;
pub const BORDER_AXES_PAD: f32 = 0.5;

/// Corners tried by `Best`, in tie-break order.
const BEST_CANDIDATES: [LegendLocation; 4] = [
    LegendLocation::UpperRight,
    LegendLocation::UpperLeft,
    LegendLocation::LowerLeft,
    LegendLocation::LowerRight,
];

/// One legend row: sample line from `handle_start_x` to `handle_end_x` at `center_y`, text at `text_left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow {
    /// Index of the series this row describes.
    pub series: usize,
    pub handle_start_x: f32,
    pub handle_end_x: f32,
    pub text_left: f32,
    pub center_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    /// Resolved corner (never `Best`).
    pub location: LegendLocation,
    pub frame: RectF,
    /// Rows in insertion order.
    pub rows: Vec<LegendRow>,
}

/// Lay out a legend for rows of measured label sizes `(width, height)`.
///
/// `em` is the legend font size and `handle_length` the sample-line length, both in device
/// units. `polylines` are the data lines in device coordinates (one entry per unbroken run),
/// used by `Best`.
pub fn layout_legend(
    label_sizes: &[(f32, f32)],
    em: f32,
    handle_length: f32,
    plot: RectF,
    location: LegendLocation,
    polylines: &[Vec<(f32, f32)>],
) -> LegendLayout {
    let pad = BORDER_PAD * em;
    let spacing = LABEL_SPACING * em;
    let text_w = label_sizes.iter().map(|s| s.0).fold(0.0f32, f32::max);
    let row_heights: Vec<f32> = label_sizes.iter().map(|s| s.1.max(em)).collect();
    let width = pad * 2.0 + handle_length + HANDLE_TEXT_PAD * em + text_w;
    let height = pad * 2.0
        + row_heights.iter().sum::<f32>()
        + spacing * row_heights.len().saturating_sub(1) as f32;

    let margin = BORDER_AXES_PAD * em;
    let location = match location {
        LegendLocation::Best => best_corner(plot, width, height, margin, polylines),
        fixed => fixed,
    };
    let frame = corner_rect(plot, width, height, margin, location);

    let mut rows = Vec::with_capacity(label_sizes.len());
    let mut y = frame.top + pad;
    for (series, h) in row_heights.iter().enumerate() {
        let handle_start_x = frame.left + pad;
        rows.push(LegendRow {
            series,
            handle_start_x,
            handle_end_x: handle_start_x + handle_length,
            text_left: handle_start_x + handle_length + HANDLE_TEXT_PAD * em,
            center_y: y + h * 0.5,
        });
        y += h + spacing;
    }
    LegendLayout { location, frame, rows }
}

fn corner_rect(plot: RectF, w: f32, h: f32, margin: f32, location: LegendLocation) -> RectF {
    let left = plot.left + margin;
    let right = plot.right - margin - w;
    let top = plot.top + margin;
    let bottom = plot.bottom - margin - h;
    match location {
        LegendLocation::UpperLeft => RectF::from_ltwh(left, top, w, h),
        LegendLocation::LowerLeft => RectF::from_ltwh(left, bottom, w, h),
        LegendLocation::LowerRight => RectF::from_ltwh(right, bottom, w, h),
        LegendLocation::UpperRight | LegendLocation::Best => RectF::from_ltwh(right, top, w, h),
    }
}

/// Corner whose box overlaps the least data (vertices inside plus segments crossing);
/// earlier candidates win ties.
fn best_corner(plot: RectF, w: f32, h: f32, margin: f32, polylines: &[Vec<(f32, f32)>]) -> LegendLocation {
    let mut best = BEST_CANDIDATES[0];
    let mut best_count = usize::MAX;
    for loc in BEST_CANDIDATES {
        let rect = corner_rect(plot, w, h, margin, loc);
        let count = overlap_badness(rect, polylines);
        if count < best_count {
            best = loc;
            best_count = count;
        }
    }
    best
}

fn overlap_badness(rect: RectF, polylines: &[Vec<(f32, f32)>]) -> usize {
    let mut badness = 0;
    for line in polylines {
        badness += line.iter().filter(|&&(x, y)| rect.contains(x, y)).count();
        badness += line.windows(2).filter(|w| segment_hits_rect(w[0], w[1], rect)).count();
    }
    badness
}

/// Liang-Barsky clip test: does the segment `a -> b` touch `rect`?
pub fn segment_hits_rect(a: (f32, f32), b: (f32, f32), rect: RectF) -> bool {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    let edges = [
        (-dx, a.0 - rect.left),
        (dx, rect.right - a.0),
        (-dy, a.1 - rect.top),
        (dy, rect.bottom - a.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return false;
            }
        }
    }
    true
}
