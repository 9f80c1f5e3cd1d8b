//! Serializable report of everything computed during one evaluation.
//!
//! Shape:
//! `config`, `texts`, `similarity.matrix`,
//! `alignment.{precision,recall}.matches`, and `metrics` with
//! `sas`, `cas`, `nas.nas_d.{precision,recall}`, `bp`, `vcs`. Each
//! `nas_d` entry carries its value together with the mapping-window height
//! and distance arrays for that direction.

use serde::{Deserialize, Serialize};
use vcs_core::config::AlignmentConfig;
use vcs_core::models::{Match, ScoreBundle, SimilarityMatrix};

use crate::alignment::{Alignment, DirectionAlignment, Selection};
use crate::scoring::{Cascade, LocalAlignment, NarrativeAlignment, NasDirection};

/// A value per alignment direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerDirection<T> {
    pub precision: T,
    pub recall: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextsReport {
    /// Reference chunk count.
    pub reference_length: usize,
    /// Generated chunk count.
    pub generated_length: usize,
    pub reference_chunks: Vec<String>,
    pub generated_chunks: Vec<String>,
}

impl TextsReport {
    pub fn new(reference_chunks: Vec<String>, generated_chunks: Vec<String>) -> Self {
        Self {
            reference_length: reference_chunks.len(),
            generated_length: generated_chunks.len(),
            reference_chunks,
            generated_chunks,
        }
    }

    /// Lengths only, for matrices scored without their source texts.
    pub fn counts_only(reference_length: usize, generated_length: usize) -> Self {
        Self {
            reference_length,
            generated_length,
            reference_chunks: Vec::new(),
            generated_chunks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Rows are reference chunks; `null` marks undefined cells.
    pub matrix: Vec<Vec<Option<f64>>>,
    pub undefined_cells: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionReport {
    pub matches: Vec<Match>,
    /// Traversed indices with no valid match.
    pub rejected: Vec<usize>,
    /// Target indices never step backwards along the narrative line.
    pub monotonic: bool,
    pub selections: Vec<Selection>,
}

impl From<&DirectionAlignment> for DirectionReport {
    fn from(a: &DirectionAlignment) -> Self {
        Self {
            matches: a.line.matches().to_vec(),
            rejected: a.rejected(),
            monotonic: a.line.is_monotonic(),
            selections: a.selections.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasReport {
    pub value: f64,
    pub las: PerDirection<f64>,
}

/// `NAS_d` for one direction and the arrays it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NasDirectionReport {
    pub value: f64,
    pub mapping_window_height: usize,
    pub distances: Vec<Option<usize>>,
    pub max_distances: Vec<usize>,
    pub total_distance: usize,
}

impl From<&NasDirection> for NasDirectionReport {
    fn from(d: &NasDirection) -> Self {
        Self {
            value: d.value,
            mapping_window_height: d.mapping_window_height,
            distances: d.distances.clone(),
            max_distances: d.max_distances.clone(),
            total_distance: d.total_distance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NasReport {
    pub value: f64,
    pub nas_d: PerDirection<NasDirectionReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub sas: f64,
    pub cas: CasReport,
    pub nas: NasReport,
    pub bp: f64,
    pub scaled_sas: f64,
    pub vad: f64,
    pub vcs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internals {
    pub config: AlignmentConfig,
    pub texts: TextsReport,
    pub similarity: SimilarityReport,
    pub alignment: PerDirection<DirectionReport>,
    pub metrics: MetricsReport,
}

/// Intermediate results of one scoring pass.
#[derive(Debug, Clone)]
pub struct Scored {
    pub matrix: SimilarityMatrix,
    pub alignment: Alignment,
    pub local: LocalAlignment,
    pub narrative: NarrativeAlignment,
    pub bundle: ScoreBundle,
    pub cascade: Cascade,
}

impl Internals {
    pub fn from_scored(config: &AlignmentConfig, texts: TextsReport, scored: &Scored) -> Self {
        let nas = &scored.narrative;
        Self {
            config: config.clone(),
            texts,
            similarity: SimilarityReport {
                matrix: scored.matrix.to_rows(),
                undefined_cells: scored.matrix.undefined_cells(),
            },
            alignment: PerDirection {
                precision: DirectionReport::from(&scored.alignment.precision),
                recall: DirectionReport::from(&scored.alignment.recall),
            },
            metrics: MetricsReport {
                sas: scored.bundle.sas,
                cas: CasReport {
                    value: scored.bundle.cas,
                    las: PerDirection {
                        precision: scored.local.precision,
                        recall: scored.local.recall,
                    },
                },
                nas: NasReport {
                    value: scored.bundle.nas,
                    nas_d: PerDirection {
                        precision: NasDirectionReport::from(&nas.precision),
                        recall: NasDirectionReport::from(&nas.recall),
                    },
                },
                bp: scored.bundle.bp,
                scaled_sas: scored.cascade.scaled_sas,
                vad: scored.cascade.vad,
                vcs: scored.cascade.vcs,
            },
        }
    }
}
