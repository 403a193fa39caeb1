// File: crates/linechart-core/src/assign.rs
// Summary: Deterministic series-to-style assignment (cyclic palettes, z-order, legend labels).

use std::fmt;

use skia_safe as skia;

use crate::series::Series;
use crate::style::{LineStyle, Marker, StyleBundle};

/// Visual attributes resolved for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Insertion index within the request.
    pub index: usize,
    pub name: String,
    /// Legend text (explicit label or the series name).
    pub label: String,
    pub color: skia::Color,
    pub line_style: LineStyle,
    pub marker: Marker,
    /// Stacking priority; higher paints later and sits on top.
    pub z_order: i32,
}

/// Non-fatal conditions reported alongside a successful render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderWarning {
    /// More series than colors or line styles; entries repeat cyclically.
    PaletteExhausted { series: usize, colors: usize, line_styles: usize },
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderWarning::PaletteExhausted { series, colors, line_styles } => write!(
                f,
                "{series} series exceed the palette ({colors} colors, {line_styles} line styles); styles will repeat"
            ),
        }
    }
}

/// `palette[i mod len]`, or `fallback` for an empty palette.
#[inline]
pub fn cycle<T: Copy>(palette: &[T], i: usize, fallback: T) -> T {
    if palette.is_empty() { fallback } else { palette[i % palette.len()] }
}

/// Assign color, line style, marker and z-order to each series by insertion index.
pub fn assign_styles(series: &[Series], bundle: &StyleBundle) -> Vec<SeriesStyle> {
    let n = series.len();
    series
        .iter()
        .enumerate()
        .map(|(i, s)| SeriesStyle {
            index: i,
            name: s.name().to_string(),
            label: s.legend_label().to_string(),
            color: cycle(bundle.colors, i, skia::Color::BLACK),
            line_style: cycle(bundle.line_styles, i, LineStyle::Solid),
            marker: cycle(bundle.markers, i, Marker::Circle),
            z_order: (n - i) as i32,
        })
        .collect()
}

/// Warnings for `count` series drawn with `bundle`.
pub fn palette_warnings(count: usize, bundle: &StyleBundle) -> Vec<RenderWarning> {
    if count > bundle.colors.len() || count > bundle.line_styles.len() {
        vec![RenderWarning::PaletteExhausted {
            series: count,
            colors: bundle.colors.len(),
            line_styles: bundle.line_styles.len(),
        }]
    } else {
        Vec::new()
    }
}

/// Series indices in paint order: ascending z, so the highest priority comes last.
pub fn draw_order(styles: &[SeriesStyle]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..styles.len()).collect();
    order.sort_by_key(|&i| (styles[i].z_order, std::cmp::Reverse(styles[i].index)));
    order
}
