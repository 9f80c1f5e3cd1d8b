//! Hysteresis-gated best-match selection.
//!
//! For every traversed item (generated chunk for precision, reference chunk
//! for recall) the selector finds the best similarity on the other axis,
//! opens a hysteresis band below it, and picks the in-band candidate closest
//! to the item's mapping window.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use vcs_core::config::AlignmentConfig;
use vcs_core::models::{Direction, Match, SimilarityMatrix};

use super::mapping_window::MappingWindow;

/// Everything the selector decided for one traversed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Index on the traversed axis.
    pub source: usize,
    pub window: MappingWindow,
    /// Best defined similarity, `None` if every cell was undefined.
    pub best: Option<f64>,
    /// Hysteresis margin, `None` when the item was rejected.
    pub margin: Option<f64>,
    /// In-band target indices, ascending.
    pub candidates: Vec<usize>,
    pub matched: Option<Match>,
}

impl Selection {
    pub fn is_rejected(&self) -> bool {
        self.matched.is_none()
    }
}

/// Hysteresis margin for a best similarity, or `None` when `best` does not
/// clear `1 − cutoff`.
pub fn hysteresis_margin(best: f64, cutoff: f64, window_control: f64) -> Option<f64> {
    let clearance = best - (1.0 - cutoff);
    if clearance <= 0.0 || clearance.is_nan() {
        return None;
    }
    Some(clearance / best * window_control)
}

/// Similarity of traversed item `source` against target `target`.
fn cell(matrix: &SimilarityMatrix, direction: Direction, source: usize, target: usize) -> f64 {
    match direction {
        Direction::Precision => matrix.value(target, source),
        Direction::Recall => matrix.value(source, target),
    }
}

/// `(traversed, target)` axis lengths for a direction.
pub fn axis_lengths(matrix: &SimilarityMatrix, direction: Direction) -> (usize, usize) {
    match direction {
        Direction::Precision => (matrix.cols(), matrix.rows()),
        Direction::Recall => (matrix.rows(), matrix.cols()),
    }
}

/// Run the selector for one traversed item.
pub fn select_one(
    matrix: &SimilarityMatrix,
    direction: Direction,
    source: usize,
    config: &AlignmentConfig,
) -> Selection {
    let (n_src, n_tgt) = axis_lengths(matrix, direction);
    let window = MappingWindow::for_item(source, n_src, n_tgt, config.lct);

    let defined = (0..n_tgt)
        .map(|t| (t, cell(matrix, direction, source, t)))
        .filter(|(_, v)| !v.is_nan());

    // Ties keep the smallest index.
    let best = defined
        .clone()
        .fold(None, |acc: Option<f64>, (_, v)| match acc {
            Some(b) if b >= v => Some(b),
            _ => Some(v),
        });

    let mut selection = Selection {
        source,
        window,
        best,
        margin: None,
        candidates: Vec::new(),
        matched: None,
    };

    let Some(best) = best else {
        return selection;
    };
    let Some(margin) = hysteresis_margin(
        best,
        config.context_cutoff_value,
        config.context_window_control,
    ) else {
        return selection;
    };

    let floor = best - margin;
    let candidates: Vec<(usize, f64)> = defined
        .filter(|(_, v)| *v >= floor && *v <= best)
        .collect();

    let chosen = candidates.iter().copied().min_by(|a, b| {
        window
            .distance(a.0)
            .cmp(&window.distance(b.0))
            .then_with(|| b.1.total_cmp(&a.1))
            .then_with(|| a.0.cmp(&b.0))
    });

    selection.margin = Some(margin);
    selection.candidates = candidates.iter().map(|(t, _)| *t).collect();
    selection.matched = chosen.map(|(target, similarity)| match direction {
        Direction::Precision => Match::new(target, source, similarity),
        Direction::Recall => Match::new(source, target, similarity),
    });
    selection
}

/// Run the selector for every traversed item of one direction, in order.
pub fn select_matches(
    matrix: &SimilarityMatrix,
    direction: Direction,
    config: &AlignmentConfig,
    parallel: bool,
) -> Vec<Selection> {
    if matrix.is_empty() {
        return Vec::new();
    }
    let (n_src, _) = axis_lengths(matrix, direction);
    if parallel {
        (0..n_src)
            .into_par_iter()
            .map(|k| select_one(matrix, direction, k, config))
            .collect()
    } else {
        (0..n_src)
            .map(|k| select_one(matrix, direction, k, config))
            .collect()
    }
}
