//! VcsErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human-readable message.
pub trait VcsErrorCode {
    /// Returns the error code string (e.g., "DIMENSION_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const DEGENERATE_VECTOR: &str = "DEGENERATE_VECTOR";
pub const PROVIDER_UNAVAILABLE: &str = "PROVIDER_UNAVAILABLE";
pub const INFERENCE_FAILED: &str = "INFERENCE_FAILED";
pub const MATRIX_SHAPE: &str = "MATRIX_SHAPE";
pub const NON_FINITE_SIMILARITY: &str = "NON_FINITE_SIMILARITY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const EMPTY_TEXT: &str = "EMPTY_TEXT";
pub const INVALID_CHUNK_SIZE: &str = "INVALID_CHUNK_SIZE";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
