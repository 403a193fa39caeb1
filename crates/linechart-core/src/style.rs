// File: crates/linechart-core/src/style.rs
// Summary: Immutable style bundles (figure, fonts, palettes, axis/grid/legend rules) and the named registry.
// Notes:
// - Bundles are `static` values; renders borrow them and nothing mutates them, so
//   any number of renders (on any thread) can share one bundle.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Points per inch; all lengths in a bundle are expressed in points.
pub const POINTS_PER_INCH: f32 = 72.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// On/off dash intervals in multiples of the line width, `None` for a solid stroke.
    pub fn dash_pattern(self) -> Option<&'static [f32]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(&[3.7, 1.6]),
            LineStyle::Dotted => Some(&[1.0, 1.65]),
            LineStyle::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    Star,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickDirection {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLocation {
    /// Corner covering the fewest data points.
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureStyle {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
}

impl FigureStyle {
    /// Raster size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width_in * self.dpi).round() as i32,
            (self.height_in * self.dpi).round() as i32,
        )
    }

    /// Vector page size in points.
    pub fn point_size(&self) -> (f32, f32) {
        (self.width_in * POINTS_PER_INCH, self.height_in * POINTS_PER_INCH)
    }

    /// Pixels per point at this figure's resolution.
    pub fn px_per_pt(&self) -> f32 {
        self.dpi / POINTS_PER_INCH
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontStyle {
    /// Preferred families, first match wins.
    pub families: &'static [&'static str],
    pub size: f32,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub legend_size: f32,
    /// Title, label and tick text color.
    pub color: skia::Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesStyle {
    pub edge_color: skia::Color,
    pub edge_width: f32,
    pub face_color: skia::Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    pub direction: TickDirection,
    pub major_size: f32,
    pub major_width: f32,
    /// Mirror x ticks on the top spine.
    pub top: bool,
    /// Mirror y ticks on the right spine.
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    pub visible: bool,
    pub color: skia::Color,
    pub line_style: LineStyle,
    pub width: f32,
    pub alpha: f32,
}

impl GridStyle {
    /// Grid color with `alpha` folded into the alpha channel.
    pub fn effective_color(&self) -> skia::Color {
        let a = (self.alpha.clamp(0.0, 1.0) * self.color.a() as f32).round() as u8;
        self.color.with_a(a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendStyle {
    pub frame: bool,
    pub face_color: skia::Color,
    pub edge_color: skia::Color,
    /// Length of the sample line, in multiples of the legend font size.
    pub handle_length: f32,
    pub location: LegendLocation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineRules {
    pub width: f32,
    pub marker_size: f32,
}

/// Named, immutable bundle of every visual parameter a render needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleBundle {
    pub name: &'static str,
    pub figure: FigureStyle,
    pub font: FontStyle,
    pub colors: &'static [skia::Color],
    pub line_styles: &'static [LineStyle],
    pub markers: &'static [Marker],
    pub axes: AxesStyle,
    pub ticks: TickStyle,
    pub grid: GridStyle,
    pub legend: LegendStyle,
    pub lines: LineRules,
    pub background: skia::Color,
}

// ---- built-in bundles --------------------------------------------------------

const SERIF: &[&str] = &["Times New Roman", "DejaVu Serif", "Computer Modern Roman", "serif"];

const PUBLICATION_FIGURE: FigureStyle = FigureStyle { width_in: 3.5, height_in: 2.5, dpi: 300.0 };

const PUBLICATION_FONT: FontStyle = FontStyle {
    families: SERIF,
    size: 10.0,
    title_size: 12.0,
    label_size: 10.0,
    tick_size: 8.0,
    legend_size: 8.0,
    color: skia::Color::BLACK,
};

const PUBLICATION_AXES: AxesStyle = AxesStyle {
    edge_color: skia::Color::new(0xFF33_3333),
    edge_width: 0.8,
    face_color: skia::Color::WHITE,
};

const PUBLICATION_TICKS: TickStyle = TickStyle {
    direction: TickDirection::In,
    major_size: 4.0,
    major_width: 0.8,
    top: true,
    right: true,
};

const LIGHT_DASHED_GRID: GridStyle = GridStyle {
    visible: true,
    color: skia::Color::new(0xFFD3_D3D3),
    line_style: LineStyle::Dashed,
    width: 0.5,
    alpha: 0.8,
};

const PUBLICATION_LINES: LineRules = LineRules { width: 1.5, marker_size: 5.0 };

/// Monochrome bundle for up to three series.
pub static THREE_LINES: StyleBundle = StyleBundle {
    name: "three-lines",
    figure: PUBLICATION_FIGURE,
    font: PUBLICATION_FONT,
    colors: &[
        skia::Color::new(0xFF00_0000), // black
        skia::Color::new(0xFF55_5555), // dark gray
        skia::Color::new(0xFF99_9999), // medium gray
    ],
    line_styles: &[LineStyle::Solid, LineStyle::Dashed, LineStyle::Dotted, LineStyle::DashDot],
    markers: &[Marker::Circle, Marker::Square, Marker::TriangleUp, Marker::TriangleDown, Marker::Diamond],
    axes: PUBLICATION_AXES,
    ticks: PUBLICATION_TICKS,
    grid: LIGHT_DASHED_GRID,
    legend: LegendStyle {
        frame: false,
        face_color: skia::Color::WHITE,
        edge_color: skia::Color::new(0xFF80_8080),
        handle_length: 2.0,
        location: LegendLocation::Best,
    },
    lines: PUBLICATION_LINES,
    background: skia::Color::WHITE,
};

/// Colorblind-friendly qualitative bundle for up to five or six series.
pub static FIVE_LINES: StyleBundle = StyleBundle {
    name: "five-lines",
    figure: PUBLICATION_FIGURE,
    font: PUBLICATION_FONT,
    colors: &[
        skia::Color::new(0xFF1F_77B4), // blue
        skia::Color::new(0xFFFF_7F0E), // orange
        skia::Color::new(0xFF2C_A02C), // green
        skia::Color::new(0xFFD6_2728), // red
        skia::Color::new(0xFF94_67BD), // purple
        skia::Color::new(0xFF8C_564B), // brown
    ],
    line_styles: &[
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::Dotted,
        LineStyle::DashDot,
        LineStyle::Solid,
        LineStyle::Dashed,
    ],
    markers: &[
        Marker::Circle,
        Marker::Square,
        Marker::TriangleUp,
        Marker::TriangleDown,
        Marker::Diamond,
        Marker::Star,
    ],
    axes: PUBLICATION_AXES,
    ticks: PUBLICATION_TICKS,
    grid: LIGHT_DASHED_GRID,
    legend: LegendStyle {
        frame: true,
        face_color: skia::Color::WHITE,
        edge_color: skia::Color::new(0xFF80_8080),
        handle_length: 2.0,
        location: LegendLocation::LowerRight,
    },
    lines: PUBLICATION_LINES,
    background: skia::Color::WHITE,
};

// ---- registry ----------------------------------------------------------------

/// Fixed, ordered set of named bundles.
pub struct StyleRegistry {
    bundles: &'static [&'static StyleBundle],
}

static REGISTRY: StyleRegistry = StyleRegistry { bundles: &[&THREE_LINES, &FIVE_LINES] };

/// The process-wide registry of built-in bundles.
pub fn registry() -> &'static StyleRegistry {
    &REGISTRY
}

impl StyleRegistry {
    /// Look up a bundle by name (ASCII case-insensitive).
    pub fn get(&self, name: &str) -> Result<&'static StyleBundle> {
        self.bundles
            .iter()
            .copied()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ChartError::StyleBundleUnknown {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            })
    }

    /// Bundle names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bundles.iter().map(|b| b.name)
    }
}

/// Shorthand for `registry().get(name)`.
pub fn find(name: &str) -> Result<&'static StyleBundle> {
    registry().get(name)
}
