// File: crates/linechart-core/tests/data_source.rs
// Purpose: Validate delimited-file loading and its typed failures.

use std::path::Path;

use linechart_core::style::THREE_LINES;
use linechart_core::{render, ChartError, ChartRequest, DataSource};

const STRESS_STRAIN: &str = "Strain,Stress_Steel,Stress_Aluminium,Stress_Titanium\n0,0,0,0\n1,200,150,300\n";

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, body).unwrap();
    p
}

#[test]
fn loads_requested_columns_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(dir.path(), "data.csv", STRESS_STRAIN);
    let series = DataSource::new(&csv, "Strain", ["Stress_Titanium", "Stress_Steel"])
        .with_labels(["Ti", "Steel"])
        .load()
        .expect("load");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name(), "Stress_Titanium");
    assert_eq!(series[0].legend_label(), "Ti");
    assert_eq!(series[0].x(), &[0.0, 1.0]);
    assert_eq!(series[0].y(), &[0.0, 300.0]);
    assert_eq!(series[1].y(), &[0.0, 200.0]);
}

#[test]
fn missing_file_is_data_source_not_found_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plot.png");
    let source = DataSource::new(dir.path().join("nope.csv"), "Strain", ["Stress_Steel"]);

    let err = ChartRequest::from_source(&source, &out).unwrap_err();
    assert!(matches!(err, ChartError::DataSourceNotFound { .. }), "got {err:?}");
    assert!(!out.exists());
}

#[test]
fn directory_is_not_a_data_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = DataSource::new(dir.path(), "x", ["y"]).load().unwrap_err();
    assert!(matches!(err, ChartError::DataSourceNotFound { .. }));
}

#[test]
fn missing_column_is_column_not_found_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(dir.path(), "data.csv", STRESS_STRAIN);
    let out = dir.path().join("plot.png");

    let source = DataSource::new(&csv, "Strain", ["Stress_Steel", "Stress_Copper"]);
    match ChartRequest::from_source(&source, &out) {
        Err(ChartError::ColumnNotFound { column, available }) => {
            assert_eq!(column, "Stress_Copper");
            assert_eq!(available.len(), 4);
        }
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
    assert!(!out.exists());

    let err = DataSource::new(&csv, "Time", ["Stress_Steel"]).load().unwrap_err();
    assert!(matches!(err, ChartError::ColumnNotFound { ref column, .. } if column == "Time"));
}

#[test]
fn label_count_must_match_columns() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(dir.path(), "data.csv", STRESS_STRAIN);
    let err = DataSource::new(&csv, "Strain", ["Stress_Steel", "Stress_Aluminium"])
        .with_labels(["Steel"])
        .load()
        .unwrap_err();
    assert!(matches!(err, ChartError::LabelCountMismatch { expected: 2, got: 1 }));
}

#[test]
fn tsv_extension_selects_tab_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let tsv = write(dir.path(), "data.tsv", "t\tv\n0\t1.5\n1\t2.5\n");
    let series = DataSource::new(&tsv, "t", ["v"]).load().expect("load tsv");
    assert_eq!(series[0].y(), &[1.5, 2.5]);

    let semi = write(dir.path(), "data.txt", "t;v\n0;3\n");
    let series = DataSource::new(&semi, "t", ["v"]).with_delimiter(b';').load().expect("load ;");
    assert_eq!(series[0].y(), &[3.0]);
}

#[test]
fn empty_cells_become_gaps_and_garbage_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let gaps = write(dir.path(), "gaps.csv", "x,y\n0,1\n1,\n2,3\n");
    let series = DataSource::new(&gaps, "x", ["y"]).load().expect("load");
    assert!(series[0].y()[1].is_nan());

    let bad = write(dir.path(), "bad.csv", "x,y\n0,1\n1,abc\n");
    match DataSource::new(&bad, "x", ["y"]).load() {
        Err(ChartError::InvalidValue { column, row, value }) => {
            assert_eq!((column.as_str(), row, value.as_str()), ("y", 2, "abc"));
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn header_only_file_yields_empty_series_error() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(dir.path(), "empty.csv", "x,y\n");
    let err = DataSource::new(&csv, "x", ["y"]).load().unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries { .. }));
}

#[test]
fn file_backed_request_renders() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(dir.path(), "data.csv", STRESS_STRAIN);
    let out = dir.path().join("figures/plot.png");
    let req = ChartRequest::from_source(&DataSource::new(&csv, "Strain", ["Stress_Steel"]), &out)
        .unwrap()
        .with_title("Steel");
    render(&req, &THREE_LINES).expect("render");
    assert!(out.exists(), "parent directories are created");
}
