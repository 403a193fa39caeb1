// File: crates/linechart-cli/src/config.rs
// Summary: TOML job file describing one chart (style, text, output, and a file source or inline series).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use linechart_core::chart::{DEFAULT_TITLE, DEFAULT_X_LABEL, DEFAULT_Y_LABEL};
use linechart_core::{ChartRequest, DataSource, Series};
use serde::Deserialize;

pub const DEFAULT_STYLE: &str = "three-lines";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("job must define either [source] or [[series]]")]
    NoSeries,
    #[error("job defines both [source] and [[series]]; pick one")]
    BothSources,
    #[error("source.delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(char),
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    #[serde(default = "default_style")]
    pub style: String,
    pub output: PathBuf,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default)]
    pub markers: bool,
    pub source: Option<SourceConfig>,
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub x_column: String,
    pub y_columns: Vec<String>,
    pub labels: Option<Vec<String>>,
    pub delimiter: Option<char>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: Option<String>,
}

fn default_style() -> String { DEFAULT_STYLE.to_string() }
fn default_title() -> String { DEFAULT_TITLE.to_string() }
fn default_x_label() -> String { DEFAULT_X_LABEL.to_string() }
fn default_y_label() -> String { DEFAULT_Y_LABEL.to_string() }

impl JobConfig {
    /// Parse and check that exactly one series source is present.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigError> {
        let job: JobConfig = toml::from_str(text)?;
        match (&job.source, job.series.is_empty()) {
            (None, true) => return Err(ConfigError::NoSeries),
            (Some(_), false) => return Err(ConfigError::BothSources),
            _ => {}
        }
        if let Some(d) = job.source.as_ref().and_then(|s| s.delimiter) {
            if !d.is_ascii() {
                return Err(ConfigError::Delimiter(d));
            }
        }
        Ok(job)
    }

    /// Read a job file; relative `output` and `source.path` resolve against its directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading job file '{}'", path.display()))?;
        let mut job = Self::from_toml_str(&text)
            .with_context(|| format!("parsing job file '{}'", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        job.output = base.join(&job.output);
        if let Some(src) = job.source.as_mut() {
            src.path = base.join(&src.path);
        }
        Ok(job)
    }

    pub fn data_source(&self) -> Option<DataSource> {
        self.source.as_ref().map(|s| {
            let mut ds = DataSource::new(&s.path, &s.x_column, &s.y_columns);
            ds.labels = s.labels.clone();
            // Checked ASCII at parse time.
            ds.delimiter = s.delimiter.map(|c| c as u8);
            ds
        })
    }

    /// Load data (if file-backed) and build the chart request.
    pub fn to_request(&self) -> Result<ChartRequest> {
        let request = match self.data_source() {
            Some(source) => ChartRequest::from_source(&source, &self.output)
                .with_context(|| format!("loading data from '{}'", source.path.display()))?,
            None => {
                let mut req = ChartRequest::new(&self.output);
                for s in &self.series {
                    let series = Series::new(&s.name, s.x.clone(), s.y.clone())
                        .with_context(|| format!("series '{}'", s.name))?;
                    req.add_series(match &s.label {
                        Some(label) => series.with_label(label),
                        None => series,
                    });
                }
                req
            }
        };
        Ok(request
            .with_axis_labels(&self.x_label, &self.y_label)
            .with_title(&self.title)
            .with_markers(self.markers))
    }
}
