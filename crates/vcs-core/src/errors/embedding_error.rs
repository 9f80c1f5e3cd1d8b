//! Embedding and vector-math errors.

use super::error_code::{self, VcsErrorCode};

/// Errors raised while producing or comparing embedding vectors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmbeddingError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("degenerate (zero-norm) vector: {context}")]
    DegenerateVector { context: String },

    #[error("embedding provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },
}

impl VcsErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::DegenerateVector { .. } => error_code::DEGENERATE_VECTOR,
            Self::ProviderUnavailable { .. } => error_code::PROVIDER_UNAVAILABLE,
            Self::InferenceFailed { .. } => error_code::INFERENCE_FAILED,
        }
    }
}
