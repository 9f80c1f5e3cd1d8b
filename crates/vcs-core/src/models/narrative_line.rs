use serde::{Deserialize, Serialize};

use super::{Direction, Match};

/// The accepted matches of one direction, ordered along the traversed axis.
///
/// Connecting the points traces the story's flow through the other text; a
/// faithful retelling produces a line that hugs the diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeLine {
    direction: Direction,
    matches: Vec<Match>,
}

impl NarrativeLine {
    /// Build a line from accepted matches, sorting by the traversed axis.
    pub fn new(direction: Direction, mut matches: Vec<Match>) -> Self {
        matches.sort_by_key(|m| (m.source_index(direction), m.target_index(direction)));
        Self { direction, matches }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// `(source, target)` points in traversal order.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matches.iter().map(move |m| {
            (
                m.source_index(self.direction),
                m.target_index(self.direction),
            )
        })
    }

    /// Whether the target index never decreases along the line.
    pub fn is_monotonic(&self) -> bool {
        let targets: Vec<usize> = self.points().map(|(_, t)| t).collect();
        targets.windows(2).all(|w| w[0] <= w[1])
    }

    /// Sum of accepted similarities.
    pub fn similarity_sum(&self) -> f64 {
        self.matches.iter().map(|m| m.similarity).sum()
    }
}
