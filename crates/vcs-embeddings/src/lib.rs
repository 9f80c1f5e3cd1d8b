//! # vcs-embeddings
//!
//! Embedding plumbing for the VCS engine. Real neural models live behind
//! [`vcs_core::traits::IEmbeddingProvider`]; this crate supplies an offline
//! hashed TF-IDF provider, a content-addressed moka cache, an engine that
//! ties the two together, and the cosine similarity used by the metric.

pub mod cache;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use cache::EmbeddingCache;
pub use engine::EmbeddingEngine;
pub use providers::HashedTfIdf;
pub use similarity::cosine_similarity;
