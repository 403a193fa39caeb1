// File: crates/linechart-core/tests/styles.rs
// Purpose: Validate the style registry lookups and the built-in bundle values.

use linechart_core::style::{self, FIVE_LINES, THREE_LINES};
use linechart_core::{registry, render_with_style, ChartError, ChartRequest, LegendLocation, Series};

#[test]
fn registry_lists_builtin_bundles_in_order() {
    let names: Vec<&str> = registry().names().collect();
    assert_eq!(names, vec!["three-lines", "five-lines"]);
}

#[test]
fn lookup_is_case_insensitive_and_returns_shared_bundle() {
    let a = style::find("Five-Lines").expect("known bundle");
    let b = registry().get("five-lines").expect("known bundle");
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.legend.location, LegendLocation::LowerRight);
    assert!(a.legend.frame);
}

#[test]
fn unknown_bundle_is_reported_with_known_names() {
    match style::find("neon") {
        Err(ChartError::StyleBundleUnknown { name, available }) => {
            assert_eq!(name, "neon");
            assert_eq!(available, vec!["three-lines".to_string(), "five-lines".to_string()]);
        }
        other => panic!("expected StyleBundleUnknown, got {other:?}"),
    }
}

#[test]
fn unknown_bundle_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.png");
    let req = ChartRequest::new(&out).with_series(Series::new("a", vec![0.0, 1.0], vec![0.0, 1.0]).unwrap());
    let err = render_with_style(&req, "missing").unwrap_err();
    assert!(matches!(err, ChartError::StyleBundleUnknown { .. }));
    assert!(!out.exists());
}

#[test]
fn publication_figure_geometry() {
    assert_eq!(THREE_LINES.figure.pixel_size(), (1050, 750));
    assert_eq!(FIVE_LINES.figure.point_size(), (252.0, 180.0));
    assert_eq!(THREE_LINES.colors.len(), 3);
    assert_eq!(FIVE_LINES.colors.len(), 6);
    assert!(!THREE_LINES.legend.frame);
    // 0.8 alpha on an opaque grid color.
    assert_eq!(THREE_LINES.grid.effective_color().a(), 204);
}
