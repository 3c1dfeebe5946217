//! Catalog loader for headered CSV sources

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::pipeline::error::PipelineError;

/// Columns that must be present in the input header.
pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "genres", "score"];

/// One raw row from the catalog source, before any validation.
///
/// Every field is optional text: the Cleaner decides what parses and what
/// gets dropped. Columns beyond these five are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub episodes: Option<String>,
    #[serde(default)]
    pub members: Option<String>,
}

/// Result of loading the catalog source.
#[derive(Debug)]
pub struct LoadedRows {
    /// Raw rows in source order
    pub records: Vec<RawRecord>,
    /// Structurally unreadable records that were skipped
    pub skipped: usize,
}

/// Load raw catalog rows from a headered CSV file.
///
/// Fails with [`PipelineError::SourceNotFound`] when the path cannot be
/// opened and [`PipelineError::SchemaError`] when a required column is
/// absent from the header. Individual records that cannot be read are
/// skipped and counted, never fatal.
pub fn load_records(path: &Path) -> Result<LoadedRows, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::SourceNotFound {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?
        .clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(PipelineError::SchemaError {
                column: required.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for result in reader.deserialize::<RawRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }

    Ok(LoadedRows { records, skipped })
}
