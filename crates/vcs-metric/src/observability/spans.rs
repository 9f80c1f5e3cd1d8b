//! Span definitions per operation: evaluation, batch.

/// Create an evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($reference_chunks:expr, $generated_chunks:expr) => {
        tracing::info_span!(
            "vcs.evaluation",
            reference_chunks = $reference_chunks,
            generated_chunks = $generated_chunks
        )
    };
}

/// Create a batch evaluation span.
#[macro_export]
macro_rules! batch_span {
    ($pairs:expr) => {
        tracing::info_span!("vcs.batch", pairs = $pairs)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EVALUATION: &str = "vcs.evaluation";
    pub const BATCH: &str = "vcs.batch";
}
