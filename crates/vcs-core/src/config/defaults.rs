//! Compiled defaults for every configuration field.

// Alignment
pub const DEFAULT_CHUNK_SIZE: usize = 1;
pub const DEFAULT_CONTEXT_CUTOFF_VALUE: f64 = 0.6;
pub const DEFAULT_CONTEXT_WINDOW_CONTROL: f64 = 5.0;
pub const DEFAULT_LCT: usize = 0;

// Embedding
pub const DEFAULT_EMBEDDING_MODEL: &str = "hashed-tfidf";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;

// Engine
pub const DEFAULT_PARALLEL: bool = true;
pub const DEFAULT_RETURN_INTERNALS: bool = true;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
