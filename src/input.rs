//! Target list loading.
//!
//! The input file is a flat, newline-delimited list of target
//! identifiers, typically produced by an earlier graph-extraction step.
//! Lines are trimmed and blank lines are skipped; no further syntax
//! checking happens here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the target list.
#[derive(Debug, Error)]
pub enum InputError {
    /// The target list file could not be read.
    #[error("failed to read target list at {}", path.display())]
    Read {
        /// The path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Read the newline-delimited target list at `path`.
///
/// # Errors
///
/// Returns [`InputError::Read`] if the file cannot be read.
pub fn read_targets(path: &Path) -> Result<Vec<String>, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_targets(&raw))
}

/// Split raw file content into trimmed, non-empty target identifiers.
#[must_use]
pub fn parse_targets(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
