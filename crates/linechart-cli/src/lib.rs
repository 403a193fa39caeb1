// File: crates/linechart-cli/src/lib.rs
// Summary: Job file loading and command handling for the `linechart` binary.

pub mod cli;
pub mod config;

pub use cli::{parse_args, run, run_render, Command, RenderArgs, UsageError};
pub use config::{ConfigError, JobConfig, SeriesConfig, SourceConfig};
