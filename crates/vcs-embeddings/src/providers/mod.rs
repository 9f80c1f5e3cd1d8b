pub mod hashed_tfidf;

pub use hashed_tfidf::HashedTfIdf;

use vcs_core::config::EmbeddingConfig;
use vcs_core::traits::IEmbeddingProvider;

/// Build the provider named by `config.model`.
///
/// Only the offline hashed model ships with the crate. Any other name is
/// expected to be supplied by the caller via `EmbeddingEngine::with_provider`;
/// here it falls back to the hashed model.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    if config.model != hashed_tfidf::MODEL_NAME {
        tracing::warn!(
            model = %config.model,
            fallback = hashed_tfidf::MODEL_NAME,
            "unknown embedding model, using offline fallback"
        );
    }
    Box::new(HashedTfIdf::new(config.dimensions))
}
