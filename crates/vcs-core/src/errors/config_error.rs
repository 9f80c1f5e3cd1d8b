//! Configuration errors.

use super::error_code::{self, VcsErrorCode};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read config {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl VcsErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ValidationFailed { .. } => error_code::CONFIG_INVALID,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
