// File: crates/linechart-core/src/draw.rs
// Summary: Paints a planned chart (background, grid, series, spines, ticks, text, legend) onto any Skia canvas.

use skia_safe as skia;

use crate::chart::{finite_runs, ChartPlan, ChartRequest};
use crate::geometry::RectF;
use crate::scale::LinearScale;
use crate::style::{LineStyle, Marker, StyleBundle, TickDirection};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::types::{AXIS_LABEL_PAD_PT, FIGURE_PAD_PT, TICK_LABEL_PAD_PT, TITLE_PAD_PT};

/// Paint the whole figure. The canvas is owned by the caller for the duration of the call.
pub fn draw_figure(
    canvas: &skia::Canvas,
    request: &ChartRequest,
    bundle: &StyleBundle,
    plan: &ChartPlan,
    shaper: &TextShaper,
) {
    let plot = plan.plot_area;
    let xs = plan.x_scale();
    let ys = plan.y_scale();

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(bundle.background);
    canvas.draw_rect(skia::Rect::from_wh(plan.width, plan.height), &fill);
    fill.set_color(bundle.axes.face_color);
    canvas.draw_rect(plot.to_skia(), &fill);

    if bundle.grid.visible {
        draw_grid(canvas, bundle, plan, &xs, &ys);
    }
    draw_series(canvas, request, bundle, plan, &xs, &ys);
    draw_spines_and_ticks(canvas, bundle, plan, &xs, &ys);
    draw_text(canvas, request, bundle, plan, shaper);
    draw_legend(canvas, request, bundle, plan, shaper);
}

// ---- helpers ----------------------------------------------------------------

/// Stroke paint with the dash pattern scaled by the stroke width.
fn stroke_paint(color: skia::Color, width: f32, style: LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Butt);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(color);
    if let Some(pattern) = style.dash_pattern() {
        let scaled: Vec<f32> = pattern.iter().map(|d| d * width.max(1e-3)).collect();
        paint.set_path_effect(skia::PathEffect::dash(&scaled, 0.0));
    }
    paint
}

fn draw_grid(canvas: &skia::Canvas, bundle: &StyleBundle, plan: &ChartPlan, xs: &LinearScale, ys: &LinearScale) {
    let plot = plan.plot_area;
    let paint = stroke_paint(
        bundle.grid.effective_color(),
        bundle.grid.width * plan.unit,
        bundle.grid.line_style,
    );
    for &v in &plan.x_ticks {
        let x = xs.to_px(v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
    for &v in &plan.y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &paint);
    }
}

fn draw_series(
    canvas: &skia::Canvas,
    request: &ChartRequest,
    bundle: &StyleBundle,
    plan: &ChartPlan,
    xs: &LinearScale,
    ys: &LinearScale,
) {
    canvas.save();
    canvas.clip_rect(plan.plot_area.to_skia(), skia::ClipOp::Intersect, true);
    let width = bundle.lines.width * plan.unit;
    let marker_size = bundle.lines.marker_size * plan.unit;

    for &i in &plan.draw_order {
        let style = &plan.styles[i];
        let series = &request.series[i];
        let stroke = stroke_paint(style.color, width, style.line_style);

        for run in finite_runs(series) {
            if run.len() >= 2 {
                let mut path = skia::Path::new();
                let (x0, y0) = run[0];
                path.move_to((xs.to_px(x0), ys.to_px(y0)));
                for &(x, y) in run.iter().skip(1) {
                    path.line_to((xs.to_px(x), ys.to_px(y)));
                }
                canvas.draw_path(&path, &stroke);
            }
            if request.show_markers {
                for &(x, y) in &run {
                    draw_marker(canvas, style.marker, xs.to_px(x), ys.to_px(y), marker_size, style.color);
                }
            }
        }
    }
    canvas.restore();
}

/// Filled marker of diameter `size` centered on `(cx, cy)`.
fn draw_marker(canvas: &skia::Canvas, marker: Marker, cx: f32, cy: f32, size: f32, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    let r = size * 0.5;

    let polygon = |pts: &[(f32, f32)]| {
        let mut path = skia::Path::new();
        path.move_to((cx + pts[0].0, cy + pts[0].1));
        for &(dx, dy) in &pts[1..] {
            path.line_to((cx + dx, cy + dy));
        }
        path.close();
        path
    };

    match marker {
        Marker::Circle => {
            canvas.draw_circle((cx, cy), r, &paint);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(cx - r, cy - r, cx + r, cy + r), &paint);
        }
        Marker::TriangleUp => {
            canvas.draw_path(&polygon(&[(0.0, -r), (r, r), (-r, r)]), &paint);
        }
        Marker::TriangleDown => {
            canvas.draw_path(&polygon(&[(0.0, r), (r, -r), (-r, -r)]), &paint);
        }
        Marker::Diamond => {
            canvas.draw_path(&polygon(&[(0.0, -r), (r, 0.0), (0.0, r), (-r, 0.0)]), &paint);
        }
        Marker::Star => {
            let pts: Vec<(f32, f32)> = (0..10)
                .map(|k| {
                    let radius = if k % 2 == 0 { r } else { r * 0.4 };
                    let angle = -std::f32::consts::FRAC_PI_2 + k as f32 * std::f32::consts::PI / 5.0;
                    (radius * angle.cos(), radius * angle.sin())
                })
                .collect();
            canvas.draw_path(&polygon(&pts), &paint);
        }
    }
}

fn draw_spines_and_ticks(
    canvas: &skia::Canvas,
    bundle: &StyleBundle,
    plan: &ChartPlan,
    xs: &LinearScale,
    ys: &LinearScale,
) {
    let plot = plan.plot_area;
    let mut spine = stroke_paint(bundle.axes.edge_color, bundle.axes.edge_width * plan.unit, LineStyle::Solid);
    spine.set_stroke_cap(skia::paint::Cap::Square);
    canvas.draw_rect(plot.to_skia(), &spine);

    let tick = stroke_paint(bundle.axes.edge_color, bundle.ticks.major_width * plan.unit, LineStyle::Solid);
    let len = bundle.ticks.major_size * plan.unit;
    // Sign that points a tick into the plot area from the bottom/left spines.
    let inward = match bundle.ticks.direction {
        TickDirection::In => 1.0,
        TickDirection::Out => -1.0,
    };

    for &v in &plan.x_ticks {
        let x = xs.to_px(v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom - inward * len), &tick);
        if bundle.ticks.top {
            canvas.draw_line((x, plot.top), (x, plot.top + inward * len), &tick);
        }
    }
    for &v in &plan.y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left, y), (plot.left + inward * len, y), &tick);
        if bundle.ticks.right {
            canvas.draw_line((plot.right, y), (plot.right - inward * len, y), &tick);
        }
    }
}

fn draw_text(
    canvas: &skia::Canvas,
    request: &ChartRequest,
    bundle: &StyleBundle,
    plan: &ChartPlan,
    shaper: &TextShaper,
) {
    let plot = plan.plot_area;
    let xs = plan.x_scale();
    let ys = plan.y_scale();
    let font = &bundle.font;
    let u = plan.unit;
    let tick_size = font.tick_size * u;
    let outward = match bundle.ticks.direction {
        TickDirection::Out => bundle.ticks.major_size * u,
        TickDirection::In => 0.0,
    };
    let tick_gap = TICK_LABEL_PAD_PT * u + outward;

    for (v, label) in plan.x_ticks.iter().zip(&plan.x_tick_labels) {
        let x = xs.to_px(*v);
        shaper.draw(canvas, label, x, plot.bottom + tick_gap, tick_size, font.color, HAlign::Center, VAlign::Top);
    }
    for (v, label) in plan.y_ticks.iter().zip(&plan.y_tick_labels) {
        let y = ys.to_px(*v);
        shaper.draw(canvas, label, plot.left - tick_gap, y, tick_size, font.color, HAlign::Right, VAlign::Center);
    }

    let tick_h = shaper.measure("0", tick_size).1;
    let y_tick_w = plan
        .y_tick_labels
        .iter()
        .map(|l| shaper.measure(l, tick_size).0)
        .fold(0.0f32, f32::max);
    let label_size = font.label_size * u;
    let label_pad = AXIS_LABEL_PAD_PT * u;
    let cx = (plot.left + plot.right) * 0.5;
    let cy = (plot.top + plot.bottom) * 0.5;

    shaper.draw(
        canvas,
        &request.x_label,
        cx,
        plot.bottom + tick_gap + tick_h + label_pad,
        label_size,
        font.color,
        HAlign::Center,
        VAlign::Top,
    );
    let y_label_h = shaper.measure(&request.y_label, label_size).1;
    let y_label_cx = plot.left - tick_gap - y_tick_w - label_pad - y_label_h * 0.5;
    shaper.draw_vertical(canvas, &request.y_label, y_label_cx.max(FIGURE_PAD_PT * u), cy, label_size, font.color);

    shaper.draw(
        canvas,
        &request.title,
        cx,
        plot.top - TITLE_PAD_PT * u,
        font.title_size * u,
        font.color,
        HAlign::Center,
        VAlign::Bottom,
    );
}

fn draw_legend(
    canvas: &skia::Canvas,
    request: &ChartRequest,
    bundle: &StyleBundle,
    plan: &ChartPlan,
    shaper: &TextShaper,
) {
    let legend = &plan.legend;
    if legend.rows.is_empty() {
        return;
    }
    let em = bundle.font.legend_size * plan.unit;

    if bundle.legend.frame {
        draw_legend_frame(canvas, bundle, plan, legend.frame);
    }

    let width = bundle.lines.width * plan.unit;
    for row in &legend.rows {
        let style = &plan.styles[row.series];
        let stroke = stroke_paint(style.color, width, style.line_style);
        canvas.draw_line((row.handle_start_x, row.center_y), (row.handle_end_x, row.center_y), &stroke);
        if request.show_markers {
            let mid = (row.handle_start_x + row.handle_end_x) * 0.5;
            draw_marker(canvas, style.marker, mid, row.center_y, bundle.lines.marker_size * plan.unit, style.color);
        }
        shaper.draw(
            canvas,
            &style.label,
            row.text_left,
            row.center_y,
            em,
            bundle.font.color,
            HAlign::Left,
            VAlign::Center,
        );
    }
}

fn draw_legend_frame(canvas: &skia::Canvas, bundle: &StyleBundle, plan: &ChartPlan, frame: RectF) {
    let radius = 0.2 * bundle.font.legend_size * plan.unit;
    let rrect = skia::RRect::new_rect_xy(frame.to_skia(), radius, radius);

    let mut face = skia::Paint::default();
    face.set_anti_alias(true);
    face.set_style(skia::paint::Style::Fill);
    face.set_color(bundle.legend.face_color);
    canvas.draw_rrect(&rrect, &face);

    let edge = stroke_paint(bundle.legend.edge_color, bundle.axes.edge_width * plan.unit, LineStyle::Solid);
    canvas.draw_rrect(&rrect, &edge);
}
