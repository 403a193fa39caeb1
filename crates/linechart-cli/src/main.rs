// File: crates/linechart-cli/src/main.rs
// Summary: Renders a line chart described by a TOML job file (defaults to the bundled stress-strain job).

use std::process::ExitCode;

use anyhow::Result;
use linechart_cli::{parse_args, run, Command, RenderArgs};

const DEFAULT_JOB: &str = "jobs/stress_strain.toml";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = if args.is_empty() {
        log::info!("no job given, using {DEFAULT_JOB}");
        Command::Render(RenderArgs { job: DEFAULT_JOB.into(), ..RenderArgs::default() })
    } else {
        parse_args(args)?
    };
    run(command)
}
