//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for textmetrics operations
#[derive(Debug, Error)]
pub enum Error {
    /// The requested input file does not exist
    #[error("ERROR, FILE DOES NOT EXIST: {}!", path.display())]
    SourceNotFound { path: PathBuf },

    /// A computation was called in violation of its contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    pub fn is_source_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_message() {
        let err = Error::source_not_found("missing/got.txt");
        assert!(err.is_source_not_found());
        assert_eq!(err.to_string(), "ERROR, FILE DOES NOT EXIST: missing/got.txt!");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_source_not_found());
    }
}
