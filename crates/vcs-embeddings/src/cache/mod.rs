//! In-memory embedding cache using moka.
//!
//! Keyed by a blake3 hash of `(model, text)`, so the same text embedded by
//! two different models never collides. Entries are written once and only
//! read afterwards.

use moka::sync::Cache;

/// Shared, thread-safe embedding cache.
#[derive(Clone)]
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Content key for a text under a model.
    pub fn key(model: &str, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(model.as_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, model: &str, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(model, text))
    }

    pub fn insert(&self, model: &str, text: &str, embedding: Vec<f32>) {
        self.cache.insert(Self::key(model, text), embedding);
    }

    /// Approximate entry count (moka updates it lazily).
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl std::fmt::Debug for EmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
