//! Filesystem path syntax checks
//!
//! Nearly any string is a valid path on the platforms we run on. Only
//! text that no operating system call could accept is refused here; the
//! returned path is the input verbatim, with no canonicalization.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons raw text cannot name a path at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathSyntaxError {
    #[error("path is empty")]
    Empty,

    #[error("path contains a NUL byte")]
    ContainsNul,
}

/// Build a path from raw text without touching the filesystem
pub fn parse_path(raw: &str) -> Result<PathBuf, PathSyntaxError> {
    if raw.is_empty() {
        return Err(PathSyntaxError::Empty);
    }
    if raw.contains('\0') {
        return Err(PathSyntaxError::ContainsNul);
    }
    Ok(PathBuf::from(raw))
}
