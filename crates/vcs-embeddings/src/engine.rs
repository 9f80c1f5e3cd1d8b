//! EmbeddingEngine: provider + cache + dimension validation.
//! Implements `IEmbeddingProvider`, so it drops in wherever a provider is
//! expected.

use rayon::prelude::*;
use tracing::{debug, info};
use vcs_core::config::EmbeddingConfig;
use vcs_core::errors::{EmbeddingError, VcsResult};
use vcs_core::traits::IEmbeddingProvider;

use crate::cache::EmbeddingCache;
use crate::providers;
use crate::similarity::validate_dimensions;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
    parallel: bool,
}

impl EmbeddingEngine {
    /// Engine over the provider named in `config`.
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self::with_provider(providers::create_provider(config), config.cache_capacity)
    }

    /// Engine over a caller-supplied provider (e.g. a neural model client).
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, cache_capacity: u64) -> Self {
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            cache_capacity,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: EmbeddingCache::new(cache_capacity),
            parallel: true,
        }
    }

    /// Toggle rayon fan-out for batch embedding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    fn embed_uncached(&self, text: &str) -> VcsResult<Vec<f32>> {
        if !self.provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.provider.name().to_string(),
            }
            .into());
        }
        let embedding = self.provider.embed(text)?;
        validate_dimensions(&embedding, self.provider.dimensions())?;
        Ok(embedding)
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> VcsResult<Vec<f32>> {
        let model = self.provider.name();
        if let Some(hit) = self.cache.get(model, text) {
            debug!(model, "embedding cache hit");
            return Ok(hit);
        }
        let embedding = self.embed_uncached(text)?;
        self.cache.insert(model, text, embedding.clone());
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[String]) -> VcsResult<Vec<Vec<f32>>> {
        if self.parallel {
            texts.par_iter().map(|t| self.embed(t)).collect()
        } else {
            texts.iter().map(|t| self.embed(t)).collect()
        }
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}

impl std::fmt::Debug for EmbeddingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingEngine")
            .field("provider", &self.provider.name())
            .field("dimensions", &self.provider.dimensions())
            .field("parallel", &self.parallel)
            .finish()
    }
}
