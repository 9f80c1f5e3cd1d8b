use unicode_segmentation::UnicodeSegmentation;
use vcs_core::traits::ISegmenter;

/// Rule-based sentence segmenter over Unicode sentence boundaries (UAX #29).
///
/// Blank sentences are dropped and surrounding whitespace is trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl UnicodeSentenceSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl ISegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_sentence_terminators() {
        let seg = UnicodeSentenceSegmenter::new();
        let out = seg.segment("The cat sat. The dog ran! Did it stop?");
        assert_eq!(out, vec!["The cat sat.", "The dog ran!", "Did it stop?"]);
    }

    #[test]
    fn blank_input_has_no_segments() {
        assert!(UnicodeSentenceSegmenter.segment("   \n ").is_empty());
    }
}
