//! Hashed TF-IDF provider.
//!
//! Deterministic, offline, dependency-free. Terms are hashed into a fixed
//! number of buckets with FNV-1a and weighted by term frequency times a
//! length-based IDF approximation.

use std::collections::HashMap;

use vcs_core::errors::VcsResult;
use vcs_core::traits::IEmbeddingProvider;

pub const MODEL_NAME: &str = "hashed-tfidf";

/// Offline embedding provider producing L2-normalized hashed TF-IDF vectors.
///
/// Text with no terms embeds to the zero vector, which the metric treats
/// as degenerate.
#[derive(Debug, Clone)]
pub struct HashedTfIdf {
    dimensions: usize,
}

impl HashedTfIdf {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut tf: HashMap<String, f32> = HashMap::new();
        let mut total = 0.0f32;
        for term in Self::terms(text) {
            *tf.entry(term).or_default() += 1.0;
            total += 1.0;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        if total == 0.0 {
            return vec;
        }

        for (term, count) in &tf {
            // Short terms are mostly function words.
            let idf = 1.0 + (term.chars().count() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * idf;
        }

        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vec.iter_mut().for_each(|v| *v /= norm);
        }
        vec
    }
}

impl IEmbeddingProvider for HashedTfIdf {
    fn embed(&self, text: &str) -> VcsResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        MODEL_NAME
    }
}
