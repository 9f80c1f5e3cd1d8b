/// VCS engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Norm below which an embedding counts as degenerate.
pub const SIMILARITY_EPSILON: f64 = 1e-12;

/// Upper bound on chunk size accepted by config validation.
pub const MAX_CHUNK_SIZE: usize = 64;

/// Upper bound on embedding dimensions accepted by config validation.
pub const MAX_EMBEDDING_DIMENSIONS: usize = 16_384;

/// Environment variable consulted by `init_tracing`.
pub const LOG_ENV_VAR: &str = "VCS_LOG";
