// File: crates/linechart-core/src/chart.rs
// Summary: Chart request, deterministic layout plan, and the render pipeline writing one image file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::assign::{assign_styles, draw_order, palette_warnings, RenderWarning, SeriesStyle};
use crate::axis::{autoscale, AxisRange};
use crate::data::DataSource;
use crate::draw::draw_figure;
use crate::error::{ChartError, Result};
use crate::format::OutputFormat;
use crate::geometry::RectF;
use crate::grid::{decimals_for_step, format_tick, ticks, TARGET_TICKS};
use crate::legend::{layout_legend, LegendLayout};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::style::{self, StyleBundle, FIVE_LINES, THREE_LINES};
use crate::text::TextShaper;
use crate::types::{Insets, AXIS_LABEL_PAD_PT, FIGURE_PAD_PT, TICK_LABEL_PAD_PT, TITLE_PAD_PT};

pub const DEFAULT_X_LABEL: &str = "X-axis";
pub const DEFAULT_Y_LABEL: &str = "Y-axis";
pub const DEFAULT_TITLE: &str = "Line Plot";

/// One chart to draw: series in insertion order plus its text and destination.
#[derive(Clone, Debug)]
pub struct ChartRequest {
    pub series: Vec<Series>,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub output: PathBuf,
    /// Draw the series' markers at each data point.
    pub show_markers: bool,
}

impl ChartRequest {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            series: Vec::new(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            output: output.into(),
            show_markers: false,
        }
    }

    /// Load every series described by `source`.
    pub fn from_source(source: &DataSource, output: impl Into<PathBuf>) -> Result<Self> {
        let mut req = Self::new(output);
        req.series = source.load()?;
        Ok(req)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    /// At least one series and no repeated names.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(ChartError::EmptyRequest);
        }
        let mut seen = HashSet::new();
        for s in &self.series {
            if !seen.insert(s.name()) {
                return Err(ChartError::DuplicateSeries { name: s.name().to_string() });
            }
        }
        Ok(())
    }
}

/// Everything decided before painting: styles, draw order, ranges, ticks and layout.
/// Lengths are in device units (pixels for raster output, points for vector output).
#[derive(Clone, Debug)]
pub struct ChartPlan {
    pub format: OutputFormat,
    pub width: f32,
    pub height: f32,
    /// Device units per point.
    pub unit: f32,
    pub plot_area: RectF,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub x_tick_labels: Vec<String>,
    pub y_tick_labels: Vec<String>,
    /// Per-series styles in insertion order.
    pub styles: Vec<SeriesStyle>,
    /// Paint order (indices into `styles`), lowest priority first.
    pub draw_order: Vec<usize>,
    pub legend: LegendLayout,
    pub warnings: Vec<RenderWarning>,
}

impl ChartPlan {
    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new(self.x_range.min, self.x_range.max, self.plot_area.left, self.plot_area.right)
    }

    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new(self.y_range.min, self.y_range.max, self.plot_area.bottom, self.plot_area.top)
    }

    /// Legend texts in legend order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.legend.rows.iter().map(|r| self.styles[r.series].label.as_str()).collect()
    }

    /// Legend colors in legend order.
    pub fn legend_colors(&self) -> Vec<skia::Color> {
        self.legend.rows.iter().map(|r| self.styles[r.series].color).collect()
    }

    pub fn style_of(&self, name: &str) -> Option<&SeriesStyle> {
        self.styles.iter().find(|s| s.name == name)
    }
}

/// Outcome of a successful render.
#[derive(Clone, Debug)]
pub struct RenderReport {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub bytes_written: usize,
    pub plan: ChartPlan,
}

impl RenderReport {
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.plan.warnings
    }
}

/// Plan `request` for the format implied by its output path.
pub fn plan(request: &ChartRequest, bundle: &StyleBundle) -> Result<ChartPlan> {
    let format = OutputFormat::from_path(&request.output)?;
    let shaper = TextShaper::new(bundle.font.families);
    plan_with(request, bundle, format, &shaper)
}

/// Render `request` with `bundle` and write the image to `request.output`.
///
/// The image is encoded fully in memory first; on any error nothing is written.
pub fn render(request: &ChartRequest, bundle: &StyleBundle) -> Result<RenderReport> {
    let format = OutputFormat::from_path(&request.output)?;
    let shaper = TextShaper::new(bundle.font.families);
    let plan = plan_with(request, bundle, format, &shaper)?;
    for w in &plan.warnings {
        log::warn!("{}: {w}", request.output.display());
    }

    let bytes = encode(request, bundle, &plan, &shaper)?;
    write_output(&request.output, &bytes)?;
    log::info!(
        "wrote {} ({} series, {}, {} bytes)",
        request.output.display(),
        request.series.len(),
        format,
        bytes.len()
    );
    Ok(RenderReport { path: request.output.clone(), format, bytes_written: bytes.len(), plan })
}

/// Render to encoded bytes without touching the filesystem.
/// `request.output` is only consulted for its extension.
pub fn render_to_bytes(request: &ChartRequest, bundle: &StyleBundle) -> Result<Vec<u8>> {
    let format = OutputFormat::from_path(&request.output)?;
    let shaper = TextShaper::new(bundle.font.families);
    let plan = plan_with(request, bundle, format, &shaper)?;
    encode(request, bundle, &plan, &shaper)
}

/// Look up `style_name` in the registry, then render. Unknown names fail before drawing.
pub fn render_with_style(request: &ChartRequest, style_name: &str) -> Result<RenderReport> {
    let bundle = style::find(style_name)?;
    render(request, bundle)
}

/// Render with the monochrome `three-lines` bundle.
pub fn render_three_line_chart(request: &ChartRequest) -> Result<RenderReport> {
    render(request, &THREE_LINES)
}

/// Render with the qualitative `five-lines` bundle.
pub fn render_five_line_chart(request: &ChartRequest) -> Result<RenderReport> {
    render(request, &FIVE_LINES)
}

// ---- helpers ----------------------------------------------------------------

fn plan_with(
    request: &ChartRequest,
    bundle: &StyleBundle,
    format: OutputFormat,
    shaper: &TextShaper,
) -> Result<ChartPlan> {
    request.validate()?;

    let styles = assign_styles(&request.series, bundle);
    let order = draw_order(&styles);
    let warnings = palette_warnings(request.series.len(), bundle);

    let (x_range, y_range) = autoscale(&request.series);
    let (x_ticks, x_step) = ticks(x_range, TARGET_TICKS);
    let (y_ticks, y_step) = ticks(y_range, TARGET_TICKS);
    let x_dec = decimals_for_step(x_step);
    let y_dec = decimals_for_step(y_step);
    let x_tick_labels: Vec<String> = x_ticks.iter().map(|&v| format_tick(v, x_dec)).collect();
    let y_tick_labels: Vec<String> = y_ticks.iter().map(|&v| format_tick(v, y_dec)).collect();

    let (width, height, unit) = if format.is_vector() {
        let (w, h) = bundle.figure.point_size();
        (w, h, 1.0)
    } else {
        let (w, h) = bundle.figure.pixel_size();
        (w as f32, h as f32, bundle.figure.px_per_pt())
    };

    let insets = tight_insets(request, bundle, shaper, unit, &x_tick_labels, &y_tick_labels);
    let plot_area = RectF::from_ltrb(
        insets.left,
        insets.top,
        (width - insets.right).max(insets.left + 1.0),
        (height - insets.bottom).max(insets.top + 1.0),
    );
    log::debug!("plot area {:?} in {}x{} ({})", plot_area, width, height, format);

    let xs = LinearScale::new(x_range.min, x_range.max, plot_area.left, plot_area.right);
    let ys = LinearScale::new(y_range.min, y_range.max, plot_area.bottom, plot_area.top);
    let polylines: Vec<Vec<(f32, f32)>> = request
        .series
        .iter()
        .flat_map(|s| finite_runs(s))
        .map(|run| run.into_iter().map(|(x, y)| (xs.to_px(x), ys.to_px(y))).collect())
        .collect();

    let em = bundle.font.legend_size * unit;
    let label_sizes: Vec<(f32, f32)> = styles.iter().map(|s| shaper.measure(&s.label, em)).collect();
    let legend = layout_legend(
        &label_sizes,
        em,
        bundle.legend.handle_length * em,
        plot_area,
        bundle.legend.location,
        &polylines,
    );

    Ok(ChartPlan {
        format,
        width,
        height,
        unit,
        plot_area,
        x_range,
        y_range,
        x_ticks,
        y_ticks,
        x_tick_labels,
        y_tick_labels,
        styles,
        draw_order: order,
        legend,
        warnings,
    })
}

/// Margins that fit the title, axis labels and tick labels around the plot area.
fn tight_insets(
    request: &ChartRequest,
    bundle: &StyleBundle,
    shaper: &TextShaper,
    unit: f32,
    x_tick_labels: &[String],
    y_tick_labels: &[String],
) -> Insets {
    let font = &bundle.font;
    let pad = FIGURE_PAD_PT * unit;
    let tick_pad = TICK_LABEL_PAD_PT * unit;
    let label_pad = AXIS_LABEL_PAD_PT * unit;
    let outward_ticks = match bundle.ticks.direction {
        crate::style::TickDirection::Out => bundle.ticks.major_size * unit,
        crate::style::TickDirection::In => 0.0,
    };

    let tick_h = shaper.measure("0", font.tick_size * unit).1;
    let y_tick_w = y_tick_labels
        .iter()
        .map(|l| shaper.measure(l, font.tick_size * unit).0)
        .fold(0.0f32, f32::max);
    let last_x_tick_w = x_tick_labels
        .last()
        .map(|l| shaper.measure(l, font.tick_size * unit).0)
        .unwrap_or(0.0);

    let (_, title_h) = shaper.measure(&request.title, font.title_size * unit);
    let (_, x_label_h) = shaper.measure(&request.x_label, font.label_size * unit);
    // The y label is drawn rotated, so its height becomes horizontal extent.
    let (_, y_label_h) = shaper.measure(&request.y_label, font.label_size * unit);

    let gap = |h: f32, p: f32| if h > 0.0 { h + p } else { 0.0 };
    Insets::new(
        pad + gap(y_label_h, label_pad) + gap(y_tick_w, tick_pad) + outward_ticks,
        pad + last_x_tick_w * 0.5,
        pad + gap(title_h, TITLE_PAD_PT * unit),
        pad + gap(x_label_h, label_pad) + gap(tick_h, tick_pad) + outward_ticks,
    )
}

/// Unbroken runs of finite points; non-finite values split a series.
pub(crate) fn finite_runs(series: &Series) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (x, y) in series.points() {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn encode(request: &ChartRequest, bundle: &StyleBundle, plan: &ChartPlan, shaper: &TextShaper) -> Result<Vec<u8>> {
    match plan.format {
        OutputFormat::Png | OutputFormat::Jpeg => {
            let (w, h) = (plan.width as i32, plan.height as i32);
            let mut surface = skia::surfaces::raster_n32_premul((w, h))
                .ok_or(ChartError::Surface { width: w, height: h })?;
            draw_figure(surface.canvas(), request, bundle, plan, shaper);

            let image = surface.image_snapshot();
            #[allow(deprecated)]
            let data = match plan.format {
                OutputFormat::Jpeg => image.encode_to_data_with_quality(skia::EncodedImageFormat::JPEG, 95),
                _ => image.encode_to_data(skia::EncodedImageFormat::PNG),
            }
            .ok_or(ChartError::Encode { format: plan.format.name() })?;
            Ok(data.as_bytes().to_vec())
        }
        OutputFormat::Svg => {
            let bounds = skia::Rect::from_wh(plan.width, plan.height);
            let canvas = skia::svg::Canvas::new(bounds, None);
            draw_figure(&canvas, request, bundle, plan, shaper);
            Ok(canvas.end().as_bytes().to_vec())
        }
        OutputFormat::Pdf => {
            let mut out: Vec<u8> = Vec::new();
            {
                let document = skia::pdf::new_document(&mut out, None);
                let mut page = document.begin_page((plan.width, plan.height), None);
                draw_figure(page.canvas(), request, bundle, plan, shaper);
                page.end_page().close();
            }
            if out.is_empty() {
                return Err(ChartError::Encode { format: plan.format.name() });
            }
            Ok(out)
        }
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
