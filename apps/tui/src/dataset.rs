use crate::domain::TradeRecord;
use crate::trade::coords::CoordinateTable;
use crate::trade::normalize::{normalize_rows_with_report, RawRow};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported dataset format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

async fn read_file(path: &Path) -> Result<String, DatasetError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads a `.csv` or `.json` dataset into raw rows.
pub async fn load_rows(path: &Path) -> Result<Vec<RawRow>, DatasetError> {
    let format =
        Format::from_path(path).ok_or_else(|| DatasetError::UnsupportedFormat(path.to_path_buf()))?;
    let contents = read_file(path).await?;

    let rows = match format {
        Format::Csv => parse_csv(&contents)?,
        Format::Json => parse_json(&contents)?,
    };

    info!(path = %path.display(), rows = rows.len(), "loaded dataset");
    Ok(rows)
}

/// Loads and normalizes a dataset in one step.
pub async fn load_records(path: &Path) -> Result<Vec<TradeRecord>, DatasetError> {
    let rows = load_rows(path).await?;
    let (records, report) = normalize_rows_with_report(&rows);
    info!(
        kept = report.kept,
        dropped = report.dropped,
        "normalized dataset"
    );
    Ok(records)
}

/// The built-in table, or a `{"Country": [lat, lon]}` JSON file.
pub async fn load_coordinates(path: Option<&Path>) -> Result<CoordinateTable, DatasetError> {
    let Some(path) = path else {
        return Ok(CoordinateTable::builtin());
    };

    let contents = read_file(path).await?;
    let table = CoordinateTable::from_json_str(&contents)?;
    info!(path = %path.display(), countries = table.len(), "loaded coordinate table");
    Ok(table)
}

pub fn parse_csv(contents: &str) -> Result<Vec<RawRow>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(contents.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), cell.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Parses an array of objects. Scalar values are stringified so JSON and
/// CSV rows go through the same normalizer.
pub fn parse_json(contents: &str) -> Result<Vec<RawRow>, DatasetError> {
    let objects: Vec<serde_json::Map<String, Value>> = serde_json::from_str(contents)?;

    Ok(objects
        .into_iter()
        .map(|object| {
            object
                .into_iter()
                .map(|(key, value)| (key, cell_text(value)))
                .collect()
        })
        .collect())
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Sorted distinct years present in `records`.
pub fn available_years(records: &[TradeRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|record| record.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

pub fn latest_year(records: &[TradeRecord]) -> Option<i32> {
    records.iter().map(|record| record.year).max()
}
