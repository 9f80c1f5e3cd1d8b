use crate::errors::VcsResult;

/// Splits a text into ordered sentence/clause segments.
pub trait ISegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Groups consecutive segments into chunks.
pub trait IChunker: Send + Sync {
    fn chunk(&self, segments: &[String], chunk_size: usize) -> VcsResult<Vec<String>>;
}
