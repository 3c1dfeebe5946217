//! Bundle serialization and atomic write

use std::path::Path;

use crate::pipeline::error::PipelineError;
use crate::report::bundle::DataBundle;

/// Serialize the bundle as compact JSON and write it atomically.
///
/// The encoding uses minimal separators with no indentation, and non-ASCII
/// text (Japanese titles in particular) is emitted literally rather than
/// escaped. The bundle is written to a `.tmp` sibling and renamed into
/// place, so a failed run never leaves a partial file at the output path.
///
/// Returns the number of bytes written.
pub fn write_bundle(bundle: &DataBundle, path: &Path) -> Result<u64, PipelineError> {
    let write_err = |source: std::io::Error| PipelineError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string(bundle).map_err(|e| write_err(e.into()))?;
    let bytes = json.len() as u64;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bundle.json".to_string());
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name));

    std::fs::write(&tmp_path, json.as_bytes()).map_err(write_err)?;
    if let Err(source) = std::fs::rename(&tmp_path, path) {
        // Best effort: don't leave the temp file behind on failure
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(source));
    }

    Ok(bytes)
}
