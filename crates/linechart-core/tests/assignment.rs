// File: crates/linechart-core/tests/assignment.rs
// Purpose: Validate cyclic palette assignment, stacking priority and legend labels.

use linechart_core::assign::{assign_styles, draw_order, palette_warnings};
use linechart_core::style::{FIVE_LINES, THREE_LINES};
use linechart_core::{plan, ChartRequest, LineStyle, RenderWarning, Series};

fn series(n: usize) -> Vec<Series> {
    (0..n)
        .map(|i| Series::new(format!("s{i}"), vec![0.0, 1.0], vec![i as f64, i as f64 + 1.0]).unwrap())
        .collect()
}

#[test]
fn colors_follow_index_without_wrap() {
    let styles = assign_styles(&series(3), &FIVE_LINES);
    for (i, s) in styles.iter().enumerate() {
        assert_eq!(s.color, FIVE_LINES.colors[i]);
        assert_eq!(s.line_style, FIVE_LINES.line_styles[i]);
        assert_eq!(s.marker, FIVE_LINES.markers[i]);
    }
}

#[test]
fn colors_wrap_cyclically_past_palette() {
    let n = 8;
    let styles = assign_styles(&series(n), &THREE_LINES);
    let p = THREE_LINES.colors.len();
    let l = THREE_LINES.line_styles.len();
    for (i, s) in styles.iter().enumerate() {
        assert_eq!(s.color, THREE_LINES.colors[i % p], "color for series {i}");
        assert_eq!(s.line_style, THREE_LINES.line_styles[i % l], "line style for series {i}");
    }
    // 4th series reuses black, with the dash-dot style (4 line styles).
    assert_eq!(styles[3].color, THREE_LINES.colors[0]);
    assert_eq!(styles[3].line_style, LineStyle::DashDot);
}

#[test]
fn palette_exhaustion_is_a_warning_not_an_error() {
    assert!(palette_warnings(3, &THREE_LINES).is_empty());
    let warnings = palette_warnings(4, &THREE_LINES);
    assert_eq!(
        warnings,
        vec![RenderWarning::PaletteExhausted { series: 4, colors: 3, line_styles: 4 }]
    );

    let req = series(7)
        .into_iter()
        .fold(ChartRequest::new("out.png"), |r, s| r.with_series(s));
    let plan = plan(&req, &FIVE_LINES).expect("plan should succeed despite exhaustion");
    assert_eq!(plan.styles.len(), 7);
    assert_eq!(plan.warnings.len(), 1);
}

#[test]
fn first_series_has_highest_stacking_priority() {
    let styles = assign_styles(&series(4), &FIVE_LINES);
    for pair in styles.windows(2) {
        assert!(pair[0].z_order > pair[1].z_order);
    }
    let order = draw_order(&styles);
    assert_eq!(order, vec![3, 2, 1, 0], "first series must be painted last");
}

#[test]
fn legend_label_falls_back_to_name() {
    let labelled = Series::new("Stress_Steel", vec![0.0], vec![0.0]).unwrap().with_label("Steel");
    let bare = Series::new("Stress_Titanium", vec![0.0], vec![0.0]).unwrap();
    let styles = assign_styles(&[labelled, bare], &THREE_LINES);
    assert_eq!(styles[0].label, "Steel");
    assert_eq!(styles[1].label, "Stress_Titanium");
}

#[test]
fn plan_keeps_legend_in_insertion_order() {
    let req = ChartRequest::new("out.svg")
        .with_series(Series::new("b", vec![0.0, 1.0], vec![1.0, 2.0]).unwrap())
        .with_series(Series::new("a", vec![0.0, 1.0], vec![2.0, 1.0]).unwrap().with_label("Alpha"))
        .with_series(Series::new("c", vec![0.0, 1.0], vec![0.0, 0.5]).unwrap());
    let plan = plan(&req, &FIVE_LINES).expect("plan");
    assert_eq!(plan.legend_labels(), vec!["b", "Alpha", "c"]);
    assert_eq!(plan.legend_colors(), FIVE_LINES.colors[..3].to_vec());
    assert_eq!(plan.style_of("a").map(|s| s.z_order), Some(2));
}
