//! Staging options and top-level error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `stage_paths`.
#[derive(Debug, Clone)]
pub struct SpecStageOptions {
    /// Glob patterns matched against the source basename; matches are skipped.
    pub patterns_exclude_files: Option<Vec<String>>,
    /// Carry permissions, timestamps and xattrs over to the copy (Linux).
    pub if_preserve_metadata: bool,
    /// Do not mutate the filesystem; record what would be copied.
    pub if_dry_run: bool,
}

impl Default for SpecStageOptions {
    fn default() -> Self {
        Self {
            patterns_exclude_files: None,
            if_preserve_metadata: true,
            if_dry_run: false,
        }
    }
}

/// One copy failure item with path + error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecStageError {
    /// Failed source or destination path.
    pub path: PathBuf,
    /// User-facing error text.
    pub exception: String,
}

/// "Top-level call failed" errors. Raised before any file is copied.
#[derive(Debug, Error)]
pub enum StageError {
    /// Invalid exclude pattern.
    #[error("Invalid exclude pattern: {0}")]
    InvalidPattern(String),
    /// Existing output directory could not be removed.
    #[error("Failed to reset destination {}: {source}", .path.display())]
    DestinationResetFailed {
        /// Output directory.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Output directory could not be created.
    #[error("Failed to initialize destination {}: {source}", .path.display())]
    DestinationInitFailed {
        /// Output directory.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
