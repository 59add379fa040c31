//! Error types for datacheck
//!
//! Every failure is fatal: errors propagate to `main`, which prints them
//! and exits with a non-zero status.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for datacheck operations
#[derive(Error, Debug)]
pub enum DataCheckError {
    /// Missing or invalid command-line usage
    #[error("{0}")]
    Usage(String),

    /// I/O error while opening or reading the manifest or a data file
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest line that is not exactly `<hash> <path>`
    #[error("Malformed manifest line {line}: expected '<hash> <path>', got '{content}'")]
    ManifestFormat { line: usize, content: String },

    /// Recorded hash differs from the hash of the file on disk
    #[error("Hash does not match for '{path}': expected {expected}, got {actual}")]
    HashMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

impl DataCheckError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a hash mismatch error
    pub fn hash_mismatch(
        path: impl Into<PathBuf>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::HashMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Check if this error was caused by a missing file or directory
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::HashMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for datacheck operations
pub type Result<T> = std::result::Result<T, DataCheckError>;

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| DataCheckError::io(path, e))
    }
}
