//! Error types for the bundling pipeline.
//!
//! Only whole-run failures appear here. A malformed individual row is never
//! an error: the Cleaner and Enricher silently drop it and report aggregate
//! counts instead.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a bundling run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file could not be opened.
    #[error("input file not readable: {path}")]
    SourceNotFound {
        /// Path that failed to resolve
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is missing from the CSV header row.
    #[error("required column '{column}' missing from input header")]
    SchemaError {
        /// Name of the missing column
        column: String,
    },

    /// The output bundle could not be written.
    #[error("failed to write bundle to {path}")]
    WriteError {
        /// Destination path of the bundle
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
