//! Configuration system for VCS.
//! TOML-based: compiled defaults < config file < `VCS_*` environment variables.

pub mod alignment_config;
pub mod defaults;
pub mod embedding_config;
pub mod engine_config;
pub mod observability_config;
pub mod vcs_config;

pub use alignment_config::AlignmentConfig;
pub use embedding_config::EmbeddingConfig;
pub use engine_config::EngineConfig;
pub use observability_config::ObservabilityConfig;
pub use vcs_config::VcsConfig;
