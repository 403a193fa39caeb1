// File: crates/linechart-core/src/data.rs
// Summary: Delimited-file data source; projects an x column and y columns into series.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ChartError, Result};
use crate::series::Series;

/// A delimited file plus the columns to plot from it.
#[derive(Clone, Debug)]
pub struct DataSource {
    pub path: PathBuf,
    pub x_column: String,
    pub y_columns: Vec<String>,
    /// Legend labels, one per y column.
    pub labels: Option<Vec<String>>,
    /// Field delimiter; inferred from the extension when unset.
    pub delimiter: Option<u8>,
}

impl DataSource {
    pub fn new<S: Into<String>>(
        path: impl Into<PathBuf>,
        x_column: impl Into<String>,
        y_columns: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            path: path.into(),
            x_column: x_column.into(),
            y_columns: y_columns.into_iter().map(Into::into).collect(),
            labels: None,
            delimiter: None,
        }
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Read the file and build one series per y column, in the order requested.
    pub fn load(&self) -> Result<Vec<Series>> {
        if let Some(labels) = &self.labels {
            if labels.len() != self.y_columns.len() {
                return Err(ChartError::LabelCountMismatch {
                    expected: self.y_columns.len(),
                    got: labels.len(),
                });
            }
        }

        let file = open_source(&self.path)?;
        let delimiter = self.delimiter.unwrap_or_else(|| default_delimiter(&self.path));
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        log::debug!("{}: headers {:?}", self.path.display(), headers);

        let x_idx = column_index(&headers, &self.x_column)?;
        let y_idx = self
            .y_columns
            .iter()
            .map(|c| column_index(&headers, c))
            .collect::<Result<Vec<_>>>()?;

        let mut xs = Vec::new();
        let mut ys: Vec<Vec<f64>> = vec![Vec::new(); y_idx.len()];
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = row + 1;
            xs.push(parse_cell(&rec, x_idx, &self.x_column, row)?);
            for ((col, &idx), out) in self.y_columns.iter().zip(&y_idx).zip(ys.iter_mut()) {
                out.push(parse_cell(&rec, idx, col, row)?);
            }
        }
        log::debug!("{}: loaded {} rows", self.path.display(), xs.len());

        self.y_columns
            .iter()
            .zip(ys)
            .enumerate()
            .map(|(i, (col, y))| {
                let series = Series::new(col.clone(), xs.clone(), y)?;
                Ok(match self.labels.as_ref().map(|l| l[i].clone()) {
                    Some(label) => series.with_label(label),
                    None => series,
                })
            })
            .collect()
    }
}

fn open_source(path: &Path) -> Result<File> {
    let not_found = |source: io::Error| ChartError::DataSourceNotFound { path: path.to_path_buf(), source };
    let meta = std::fs::metadata(path).map_err(not_found)?;
    if meta.is_dir() {
        return Err(not_found(io::Error::new(io::ErrorKind::InvalidInput, "path is a directory")));
    }
    File::open(path).map_err(not_found)
}

/// Tab for `.tsv`/`.tab`, comma otherwise.
pub fn default_delimiter(path: &Path) -> u8 {
    let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

fn column_index(headers: &[String], column: &str) -> Result<usize> {
    headers.iter().position(|h| h == column).ok_or_else(|| ChartError::ColumnNotFound {
        column: column.to_string(),
        available: headers.to_vec(),
    })
}

/// Empty cells (and short rows) read as NaN so the line shows a gap.
fn parse_cell(rec: &csv::StringRecord, idx: usize, column: &str, row: usize) -> Result<f64> {
    let raw = rec.get(idx).unwrap_or("");
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| ChartError::InvalidValue {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}
