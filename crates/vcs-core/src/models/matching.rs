use serde::{Deserialize, Serialize};

/// Which axis of the similarity matrix is being traversed.
///
/// Precision walks generated chunks (columns) and looks for their best
/// reference row; recall walks reference chunks (rows) and looks for their
/// best generated column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Precision,
    Recall,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Precision => "precision",
            Direction::Recall => "recall",
        }
    }
}

/// An accepted best match between a reference and a generated chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub ref_index: usize,
    pub gen_index: usize,
    pub similarity: f64,
}

impl Match {
    pub fn new(ref_index: usize, gen_index: usize, similarity: f64) -> Self {
        Self {
            ref_index,
            gen_index,
            similarity,
        }
    }

    /// Index on the traversed axis (generated for precision, reference for recall).
    pub fn source_index(&self, direction: Direction) -> usize {
        match direction {
            Direction::Precision => self.gen_index,
            Direction::Recall => self.ref_index,
        }
    }

    /// Index on the matched axis.
    pub fn target_index(&self, direction: Direction) -> usize {
        match direction {
            Direction::Precision => self.ref_index,
            Direction::Recall => self.gen_index,
        }
    }
}
