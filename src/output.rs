//! Output path planning — deterministic, date-addressed recording file names.
//!
//! The planned path is the only persisted state the skip logic relies on:
//! a file already present at the path means the broadcast was recorded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProgramError;

/// Plan the output path for one program occurrence:
/// `{output_dir}/{name}_{YYYYMMDD}.m4a`, with `date` taken from the
/// resolved window's start. Ensures `output_dir` exists.
pub fn plan(output_dir: &Path, name: &str, date: &str) -> Result<PathBuf, ProgramError> {
    fs::create_dir_all(output_dir).map_err(|e| ProgramError::OutputDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    Ok(output_dir.join(format!("{name}_{date}.m4a")))
}

/// File size in megabytes, for log lines. None if the file can't be stat'd.
pub fn size_mb(path: &Path) -> Option<f64> {
    fs::metadata(path)
        .ok()
        .map(|m| m.len() as f64 / (1024.0 * 1024.0))
}
