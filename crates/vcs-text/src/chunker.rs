use vcs_core::errors::{TextError, VcsResult};
use vcs_core::traits::IChunker;

/// Groups consecutive segments into chunks of `chunk_size`, joined by a
/// single space. The last chunk may be shorter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentChunker;

impl SegmentChunker {
    pub fn new() -> Self {
        Self
    }
}

impl IChunker for SegmentChunker {
    fn chunk(&self, segments: &[String], chunk_size: usize) -> VcsResult<Vec<String>> {
        if chunk_size == 0 {
            return Err(TextError::InvalidChunkSize { chunk_size }.into());
        }
        Ok(segments
            .chunks(chunk_size)
            .map(|group| group.join(" "))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("s{i}")).collect()
    }

    #[test]
    fn chunk_size_one_is_identity() {
        let out = SegmentChunker.chunk(&segments(3), 1).unwrap();
        assert_eq!(out, vec!["s0", "s1", "s2"]);
    }

    #[test]
    fn last_chunk_may_be_short() {
        let out = SegmentChunker.chunk(&segments(5), 2).unwrap();
        assert_eq!(out, vec!["s0 s1", "s2 s3", "s4"]);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(SegmentChunker.chunk(&segments(2), 0).is_err());
    }

    #[test]
    fn empty_segments_give_no_chunks() {
        assert!(SegmentChunker.chunk(&[], 3).unwrap().is_empty());
    }
}
