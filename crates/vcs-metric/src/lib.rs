//! # vcs-metric
//!
//! Video Comprehension Score. Compares a generated description of a story
//! against a reference by
//!
//! 1. building a reference × generated cosine-similarity matrix,
//! 2. selecting hysteresis-gated best matches in both directions,
//! 3. scoring content (CAS) and narrative order (NAS) of those matches,
//! 4. cascading SAS, CAS, NAS and the brevity penalty through gated ratios.
//!
//! [`VcsEngine`] runs the whole pipeline from raw text;
//! [`score_matrix`] scores a precomputed matrix.

pub mod alignment;
pub mod engine;
pub mod internals;
pub mod observability;
pub mod scoring;
pub mod similarity;

pub use engine::{score_matrix, Evaluation, VcsEngine};
pub use internals::Internals;
pub use observability::{init_tracing, init_tracing_with_config};
