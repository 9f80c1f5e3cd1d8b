//! Similarity-matrix and alignment errors.

use super::error_code::{self, VcsErrorCode};

/// Errors that can occur while assembling or consuming a similarity matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlignmentError {
    #[error("matrix shape mismatch: expected {expected} cells, got {actual}")]
    MatrixShape { expected: usize, actual: usize },

    #[error("non-finite similarity at row {row}, column {col}")]
    NonFiniteSimilarity { row: usize, col: usize },
}

impl VcsErrorCode for AlignmentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MatrixShape { .. } => error_code::MATRIX_SHAPE,
            Self::NonFiniteSimilarity { .. } => error_code::NON_FINITE_SIMILARITY,
        }
    }
}
