//! Text preprocessing errors.

use super::error_code::{self, VcsErrorCode};

/// Errors raised by segmenters and chunkers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TextError {
    #[error("{role} text produced no segments")]
    EmptyText { role: String },

    #[error("chunk size must be at least 1, got {chunk_size}")]
    InvalidChunkSize { chunk_size: usize },
}

impl VcsErrorCode for TextError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyText { .. } => error_code::EMPTY_TEXT,
            Self::InvalidChunkSize { .. } => error_code::INVALID_CHUNK_SIZE,
        }
    }
}
