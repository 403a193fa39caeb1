// File: crates/linechart-cli/tests/cli_args.rs
// Purpose: Argument parsing and end-to-end job rendering through the command layer.

use std::path::PathBuf;

use linechart_cli::{parse_args, run_render, Command, RenderArgs, UsageError};
use linechart_core::ChartError;

#[test]
fn parses_job_and_overrides() {
    let cmd = parse_args(["job.toml", "--style", "five-lines", "-o", "x.svg", "--markers"]).unwrap();
    assert_eq!(
        cmd,
        Command::Render(RenderArgs {
            job: PathBuf::from("job.toml"),
            style: Some("five-lines".into()),
            output: Some(PathBuf::from("x.svg")),
            markers: true,
        })
    );
}

#[test]
fn flags_and_usage_errors() {
    assert_eq!(parse_args(["--help"]).unwrap(), Command::Help);
    assert_eq!(parse_args(["--list-styles"]).unwrap(), Command::ListStyles);
    assert_eq!(parse_args(Vec::<String>::new()), Err(UsageError::MissingJob));
    assert_eq!(parse_args(["job.toml", "--style"]), Err(UsageError::MissingValue("--style".into())));
    assert_eq!(parse_args(["--bogus"]), Err(UsageError::UnknownOption("--bogus".into())));
    assert_eq!(parse_args(["a.toml", "b.toml"]), Err(UsageError::Unexpected("b.toml".into())));
}

fn write_job(dir: &std::path::Path) -> PathBuf {
    std::fs::write(
        dir.join("data.csv"),
        "Strain,Steel,Aluminium\n0.0,0,0\n0.01,200,70\n0.02,260,110\n",
    )
    .unwrap();
    let job = dir.join("job.toml");
    std::fs::write(
        &job,
        r#"
output = "figures/plot.png"
title = "Stress-Strain"
[source]
path = "data.csv"
x_column = "Strain"
y_columns = ["Steel", "Aluminium"]
"#,
    )
    .unwrap();
    job
}

#[test]
fn renders_job_with_style_override() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path());
    let args = RenderArgs { job, style: Some("FIVE-LINES".into()), ..RenderArgs::default() };

    let report = run_render(&args).expect("render job");
    assert_eq!(report.path, dir.path().join("figures/plot.png"));
    assert!(report.path.exists());
    assert_eq!(report.plan.legend_labels(), vec!["Steel", "Aluminium"]);
    assert!(report.warnings().is_empty());
}

#[test]
fn unknown_style_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path());
    let args = RenderArgs { job, style: Some("seven-lines".into()), ..RenderArgs::default() };

    let err = run_render(&args).unwrap_err();
    assert!(matches!(err.downcast_ref::<ChartError>(), Some(ChartError::StyleBundleUnknown { .. })));
    assert!(!dir.path().join("figures").exists());
}

#[test]
fn output_override_changes_format() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path());
    let out = dir.path().join("override.svg");
    let args = RenderArgs { job, output: Some(out.clone()), ..RenderArgs::default() };

    let report = run_render(&args).expect("render svg");
    assert_eq!(report.path, out);
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("<svg"));
}
