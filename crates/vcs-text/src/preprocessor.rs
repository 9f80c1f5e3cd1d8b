use vcs_core::errors::{TextError, VcsResult};
use vcs_core::traits::{IChunker, ISegmenter};

use crate::chunker::SegmentChunker;
use crate::contractions::expand_contractions;
use crate::normalize::{fix_punctuation_spacing, remove_punctuation};
use crate::segmenter::UnicodeSentenceSegmenter;

/// Full text chain: contraction expansion, punctuation spacing fix,
/// sentence segmentation, per-segment punctuation removal, chunking.
pub struct TextPreprocessor {
    segmenter: Box<dyn ISegmenter>,
    chunker: Box<dyn IChunker>,
    chunk_size: usize,
}

impl TextPreprocessor {
    /// Default rule-based collaborators.
    pub fn new(chunk_size: usize) -> Self {
        Self::with_components(
            Box::new(UnicodeSentenceSegmenter),
            Box::new(SegmentChunker),
            chunk_size,
        )
    }

    /// Plug in an external segmenter or chunker.
    pub fn with_components(
        segmenter: Box<dyn ISegmenter>,
        chunker: Box<dyn IChunker>,
        chunk_size: usize,
    ) -> Self {
        Self {
            segmenter,
            chunker,
            chunk_size,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Cleaned, non-empty segments in reading order.
    pub fn segments(&self, text: &str) -> Vec<String> {
        let prepared = fix_punctuation_spacing(&expand_contractions(text));
        self.segmenter
            .segment(&prepared)
            .iter()
            .map(|s| remove_punctuation(s))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Ordered chunks for one text. Empty text yields no chunks.
    pub fn chunks(&self, text: &str) -> VcsResult<Vec<String>> {
        let segments = self.segments(text);
        let chunks = self.chunker.chunk(&segments, self.chunk_size)?;
        tracing::debug!(
            segments = segments.len(),
            chunks = chunks.len(),
            chunk_size = self.chunk_size,
            "text chunked"
        );
        Ok(chunks)
    }

    /// Like [`chunks`](Self::chunks) but fails with `EmptyText` when the
    /// text has nothing left after cleaning.
    pub fn require_chunks(&self, text: &str, role: &str) -> VcsResult<Vec<String>> {
        let chunks = self.chunks(text)?;
        if chunks.is_empty() {
            return Err(TextError::EmptyText {
                role: role.to_string(),
            }
            .into());
        }
        Ok(chunks)
    }

    /// The whole text with the same normalization applied, as one string.
    /// Used for document-level embeddings.
    pub fn normalize_document(&self, text: &str) -> String {
        self.segments(text).join(" ")
    }
}

impl std::fmt::Debug for TextPreprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPreprocessor")
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}
