// File: crates/linechart-cli/src/cli.rs
// Summary: Argument parsing and the render command behind the `linechart` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use linechart_core::{registry, render, RenderReport};

use crate::config::JobConfig;

pub const USAGE: &str = "\
usage: linechart <job.toml> [--style NAME] [--output PATH] [--markers]
       linechart --list-styles
       linechart --help";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    ListStyles,
    Render(RenderArgs),
}

/// Overrides given on the command line win over the job file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderArgs {
    pub job: PathBuf,
    pub style: Option<String>,
    pub output: Option<PathBuf>,
    pub markers: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing job file\n{}", USAGE)]
    MissingJob,
    #[error("option {0} needs a value")]
    MissingValue(String),
    #[error("unknown option {0}\n{}", USAGE)]
    UnknownOption(String),
    #[error("unexpected argument {0}")]
    Unexpected(String),
}

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut it = args.into_iter().map(Into::into);
    let mut job: Option<PathBuf> = None;
    let mut out = RenderArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--list-styles" => return Ok(Command::ListStyles),
            "--markers" => out.markers = true,
            "-s" | "--style" => {
                out.style = Some(it.next().ok_or_else(|| UsageError::MissingValue(arg.clone()))?);
            }
            "-o" | "--output" => {
                out.output = Some(it.next().ok_or_else(|| UsageError::MissingValue(arg.clone()))?.into());
            }
            s if s.starts_with('-') && s.len() > 1 => return Err(UsageError::UnknownOption(arg)),
            _ if job.is_none() => job = Some(PathBuf::from(arg)),
            _ => return Err(UsageError::Unexpected(arg)),
        }
    }

    out.job = job.ok_or(UsageError::MissingJob)?;
    Ok(Command::Render(out))
}

/// Load the job, apply overrides and render it.
///
/// The style is resolved before any data is read, so a bad name never touches the source file.
pub fn run_render(args: &RenderArgs) -> Result<RenderReport> {
    let mut job = JobConfig::from_path(&args.job)?;
    if let Some(style) = &args.style {
        job.style = style.clone();
    }
    if let Some(output) = &args.output {
        job.output = output.clone();
    }
    job.markers |= args.markers;

    let bundle = registry().get(&job.style)?;
    log::debug!("job {} uses style {}", args.job.display(), bundle.name);

    let request = job.to_request()?;
    let report = render(&request, bundle)
        .with_context(|| format!("rendering '{}'", request.output.display()))?;
    Ok(report)
}

/// Execute a parsed command, printing user-facing output to stdout.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Help => println!("{USAGE}"),
        Command::ListStyles => {
            for name in registry().names() {
                println!("{name}");
            }
        }
        Command::Render(args) => {
            let report = run_render(&args)?;
            for w in report.warnings() {
                println!("  warning: {w}");
            }
            println!("Wrote {} ({}, {} bytes)", report.path.display(), report.format, report.bytes_written);
        }
    }
    Ok(())
}
