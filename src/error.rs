//! Error types for envstitch operations.
//!
//! This module defines [`EnvStitchError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A candidate env file that exists but cannot be read is fatal and aborts
//!   the build step ([`EnvStitchError::EnvFileRead`])
//! - Malformed lines inside an env file are skipped silently, never an error
//! - Use `anyhow::Error` (via `EnvStitchError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envstitch operations.
#[derive(Debug, Error)]
pub enum EnvStitchError {
    /// A candidate env file passed the existence check but could not be read.
    #[error("Failed to read env file {path}: {source}")]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envstitch operations.
pub type Result<T> = std::result::Result<T, EnvStitchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_file_read_displays_path() {
        let err = EnvStitchError::EnvFileRead {
            path: PathBuf::from("/project/.env.local"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/.env.local"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnvStitchError = io_err.into();
        assert!(matches!(err, EnvStitchError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(EnvStitchError::EnvFileRead {
                path: PathBuf::from(".env"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
            })
        }
        assert!(returns_error().is_err());
    }
}
