//! Error types for lectio
//!
//! Loading never fails (bad data degrades to empty values); these errors only
//! surface from writes.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by persistence
#[derive(Debug, Error)]
pub enum LectioError {
    /// Failed to read or write a file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a value to JSON
    #[error("Failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LectioError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LectioError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, LectioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = LectioError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("gone"));
    }
}
