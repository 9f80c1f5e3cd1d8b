//! Narrative alignment (NAS): how far the narrative line drifts from the
//! mapping windows, per direction, combined by harmonic mean.

use serde::{Deserialize, Serialize};
use vcs_core::config::AlignmentConfig;

use super::las::harmonic_mean;
use crate::alignment::{window_height, Alignment, DirectionAlignment, MappingWindow};

/// Distance-based NAS for one direction, with the per-item arrays kept for
/// reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NasDirection {
    /// `NAS_d` in `[0, 1]`.
    pub value: f64,
    pub mapping_window_height: usize,
    /// Distance of each traversed item's match from its window, `None` for
    /// rejected items.
    pub distances: Vec<Option<usize>>,
    /// Largest distance each traversed item could have had.
    pub max_distances: Vec<usize>,
}

impl NasDirection {
    pub fn compute(alignment: &DirectionAlignment, config: &AlignmentConfig) -> Self {
        let n_src = alignment.source_len;
        let n_tgt = alignment.target_len;
        if n_src == 0 || n_tgt == 0 {
            return Self {
                value: 0.0,
                mapping_window_height: window_height(n_src, n_tgt),
                distances: vec![None; n_src],
                max_distances: vec![0; n_src],
            };
        }

        let windows: Vec<MappingWindow> = (0..n_src)
            .map(|k| MappingWindow::for_item(k, n_src, n_tgt, config.lct))
            .collect();
        let max_distances: Vec<usize> = windows.iter().map(|w| w.max_distance(n_tgt)).collect();

        let mut distances = vec![None; n_src];
        for (source, target) in alignment.line.points() {
            distances[source] = Some(windows[source].distance(target));
        }

        let value = if alignment.line.is_empty() {
            0.0
        } else {
            let total: usize = distances.iter().flatten().sum();
            let budget: usize = max_distances.iter().sum();
            if budget == 0 {
                1.0
            } else {
                (1.0 - total as f64 / budget as f64).clamp(0.0, 1.0)
            }
        };

        Self {
            value,
            mapping_window_height: window_height(n_src, n_tgt),
            distances,
            max_distances,
        }
    }

    /// Total distance of the narrative line from its windows.
    pub fn total_distance(&self) -> usize {
        self.distances.iter().flatten().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeAlignment {
    pub precision: NasDirection,
    pub recall: NasDirection,
    /// Narrative Alignment Score.
    pub nas: f64,
}

impl NarrativeAlignment {
    pub fn compute(alignment: &Alignment, config: &AlignmentConfig) -> Self {
        let precision = NasDirection::compute(&alignment.precision, config);
        let recall = NasDirection::compute(&alignment.recall, config);
        let nas = harmonic_mean(precision.value, recall.value);
        Self {
            precision,
            recall,
            nas,
        }
    }
}
