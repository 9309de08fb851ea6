//! Error types for importviz operations.
//!
//! A scan either produces a complete graph or stops at the first file it
//! cannot read. Directories that cannot be listed are not errors; the walker
//! logs and skips them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for importviz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for importviz operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A source file matched a scanned extension but could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The project root does not exist
    #[error("project root not found: {}", .0.display())]
    InvalidRoot(PathBuf),
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
