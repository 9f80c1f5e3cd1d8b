//! Seams to the external collaborators of the pipeline.

pub mod embedding;
pub mod segmenter;

pub use embedding::IEmbeddingProvider;
pub use segmenter::{IChunker, ISegmenter};
