//! Value objects flowing through the evaluation pipeline.
//! All of them are immutable once constructed.

pub mod chunk;
pub mod matching;
pub mod narrative_line;
pub mod score_bundle;
pub mod similarity_matrix;

pub use chunk::Chunk;
pub use matching::{Direction, Match};
pub use narrative_line::NarrativeLine;
pub use score_bundle::ScoreBundle;
pub use similarity_matrix::SimilarityMatrix;
