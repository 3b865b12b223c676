//! Unified error types for the sportscast engine.
//!
//! Errors here are local by design: a rejected event or a bad query must
//! never corrupt the score store or abort processing of subsequent events.
//! Nothing in this crate treats an error as fatal to the process.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sportscast operations.
#[derive(Error, Debug)]
pub enum SportscastError {
    /// Structurally invalid event data (empty repository or actor).
    #[error("invalid event: {message}")]
    Validation { message: String },

    /// A query named a metric outside the tracked set.
    #[error("unknown metric: {metric}")]
    UnknownMetric { metric: String },

    /// Configuration loading or validation errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// JSON parsing/serialization errors.
    #[error("serialization error: {message}")]
    Serde { message: String },

    /// I/O errors from replay file operations.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Event source adapter errors (fetch or authentication failures).
    #[error("source error: {message}")]
    Source { message: String },
}

/// A specialized Result type for sportscast operations.
pub type Result<T> = std::result::Result<T, SportscastError>;

impl SportscastError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unknown-metric error.
    pub fn unknown_metric(metric: impl Into<String>) -> Self {
        Self::UnknownMetric {
            metric: metric.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    pub fn serde(message: impl Into<String>) -> Self {
        Self::Serde {
            message: message.into(),
        }
    }

    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create an event source error.
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}

impl From<io::Error> for SportscastError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SportscastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = SportscastError::validation("empty repository");
        assert_eq!(err.to_string(), "invalid event: empty repository");
    }

    #[test]
    fn test_unknown_metric_error_display() {
        let err = SportscastError::unknown_metric("release");
        assert_eq!(err.to_string(), "unknown metric: release");
    }

    #[test]
    fn test_config_error_display() {
        let err = SportscastError::config("invalid TOML");
        assert_eq!(err.to_string(), "config error: invalid TOML");
    }

    #[test]
    fn test_storage_error_display() {
        let err = SportscastError::storage(
            "/tmp/events.jsonl",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("storage error"));
        assert!(err.to_string().contains("/tmp/events.jsonl"));
    }

    #[test]
    fn test_source_error_display() {
        let err = SportscastError::source("authentication failed");
        assert_eq!(err.to_string(), "source error: authentication failed");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: SportscastError = io_err.into();
        assert!(matches!(err, SportscastError::Storage { .. }));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: SportscastError = json_err.into();
        assert!(matches!(err, SportscastError::Serde { .. }));
    }
}
