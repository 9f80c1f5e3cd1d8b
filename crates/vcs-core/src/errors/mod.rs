//! Error handling for VCS.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod alignment_error;
pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod text_error;

pub use alignment_error::AlignmentError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::VcsErrorCode;
pub use text_error::TextError;

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("text error: {0}")]
    Text(#[from] TextError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for VcsError {
    fn from(e: serde_json::Error) -> Self {
        VcsError::Serialization {
            reason: e.to_string(),
        }
    }
}

impl VcsErrorCode for VcsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Embedding(e) => e.error_code(),
            Self::Alignment(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Text(e) => e.error_code(),
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Crate-wide result alias.
pub type VcsResult<T> = Result<T, VcsError>;
