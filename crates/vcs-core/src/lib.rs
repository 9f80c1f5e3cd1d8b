//! # vcs-core
//!
//! Foundation crate for the VCS (Video Comprehension Score) engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VcsConfig;
pub use errors::{VcsError, VcsResult};
pub use models::{
    Chunk, Direction, Match, NarrativeLine, ScoreBundle, SimilarityMatrix,
};
