//! # vcs-text
//!
//! Default text collaborators for the VCS engine: contraction expansion,
//! punctuation normalization, Unicode sentence segmentation, and
//! fixed-size chunking. Any of them can be swapped for another
//! `ISegmenter` / `IChunker` implementation.

pub mod chunker;
pub mod contractions;
pub mod normalize;
pub mod preprocessor;
pub mod segmenter;

pub use chunker::SegmentChunker;
pub use preprocessor::TextPreprocessor;
pub use segmenter::UnicodeSentenceSegmenter;
