use serde::{Deserialize, Serialize};

use super::defaults;

/// Chunking and best-match selection parameters.
///
/// Field names follow the reporting contract (`context_cutoff_value`,
/// `context_window_control`) so a serialized config can be echoed verbatim
/// into an evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Number of segments grouped into one chunk.
    pub chunk_size: usize,
    /// Similarity floor: a column/row whose best value does not clear
    /// `1 - context_cutoff_value` has no match.
    pub context_cutoff_value: f64,
    /// Hysteresis scaling constant applied to the best-match margin.
    pub context_window_control: f64,
    /// Local Chronology Tolerance, in chunk units.
    pub lct: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::DEFAULT_CHUNK_SIZE,
            context_cutoff_value: defaults::DEFAULT_CONTEXT_CUTOFF_VALUE,
            context_window_control: defaults::DEFAULT_CONTEXT_WINDOW_CONTROL,
            lct: defaults::DEFAULT_LCT,
        }
    }
}

impl AlignmentConfig {
    /// Convenience constructor for the three selection parameters.
    pub fn new(cutoff: f64, window_control: f64, lct: usize) -> Self {
        Self {
            context_cutoff_value: cutoff,
            context_window_control: window_control,
            lct,
            ..Default::default()
        }
    }
}
