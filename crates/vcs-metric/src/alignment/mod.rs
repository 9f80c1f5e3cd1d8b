//! Precision/recall alignment over a similarity matrix.

pub mod best_match;
pub mod mapping_window;

pub use best_match::{hysteresis_margin, select_matches, Selection};
pub use mapping_window::{window_height, MappingWindow};

use serde::{Deserialize, Serialize};
use vcs_core::config::AlignmentConfig;
use vcs_core::models::{Direction, NarrativeLine, SimilarityMatrix};

/// Selections and the resulting narrative line for one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionAlignment {
    pub direction: Direction,
    /// Number of traversed items.
    pub source_len: usize,
    /// Number of target items.
    pub target_len: usize,
    pub selections: Vec<Selection>,
    pub line: NarrativeLine,
}

impl DirectionAlignment {
    pub fn new(
        matrix: &SimilarityMatrix,
        direction: Direction,
        config: &AlignmentConfig,
        parallel: bool,
    ) -> Self {
        let (source_len, target_len) = best_match::axis_lengths(matrix, direction);
        let selections = select_matches(matrix, direction, config, parallel);
        let line = NarrativeLine::new(
            direction,
            selections.iter().filter_map(|s| s.matched).collect(),
        );
        Self {
            direction,
            source_len,
            target_len,
            selections,
            line,
        }
    }

    /// Traversed indices that produced no match.
    pub fn rejected(&self) -> Vec<usize> {
        self.selections
            .iter()
            .filter(|s| s.is_rejected())
            .map(|s| s.source)
            .collect()
    }
}

/// Both directions of one evaluation. The directions are independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    pub precision: DirectionAlignment,
    pub recall: DirectionAlignment,
}

impl Alignment {
    pub fn compute(matrix: &SimilarityMatrix, config: &AlignmentConfig, parallel: bool) -> Self {
        let (precision, recall) = if parallel {
            rayon::join(
                || DirectionAlignment::new(matrix, Direction::Precision, config, true),
                || DirectionAlignment::new(matrix, Direction::Recall, config, true),
            )
        } else {
            (
                DirectionAlignment::new(matrix, Direction::Precision, config, false),
                DirectionAlignment::new(matrix, Direction::Recall, config, false),
            )
        };
        tracing::debug!(
            precision_matches = precision.line.len(),
            recall_matches = recall.line.len(),
            precision_rejected = precision.source_len - precision.line.len(),
            recall_rejected = recall.source_len - recall.line.len(),
            "alignment computed"
        );
        Self { precision, recall }
    }
}
