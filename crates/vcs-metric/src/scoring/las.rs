//! Local alignment (LAS) per direction and their harmonic mean (CAS).

use serde::{Deserialize, Serialize};

use crate::alignment::{Alignment, DirectionAlignment};

/// Harmonic mean `2ab / (a + b)`, 0 when both are 0.
pub fn harmonic_mean(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum <= 0.0 {
        return 0.0;
    }
    2.0 * a * b / sum
}

/// Sum of accepted similarities over the number of traversed items.
/// Rejected items count in the denominator.
pub fn local_alignment_score(alignment: &DirectionAlignment) -> f64 {
    if alignment.source_len == 0 {
        return 0.0;
    }
    (alignment.line.similarity_sum() / alignment.source_len as f64).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalAlignment {
    pub precision: f64,
    pub recall: f64,
    /// Content Alignment Score.
    pub cas: f64,
}

impl LocalAlignment {
    pub fn compute(alignment: &Alignment) -> Self {
        let precision = local_alignment_score(&alignment.precision);
        let recall = local_alignment_score(&alignment.recall);
        Self {
            precision,
            recall,
            cas: harmonic_mean(precision, recall),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmonic_mean_of_worked_example() {
        assert!((harmonic_mean(0.61, 0.66) - 0.634).abs() < 1e-3);
    }

    #[test]
    fn harmonic_mean_of_zeros_is_zero() {
        assert_eq!(harmonic_mean(0.0, 0.0), 0.0);
        assert_eq!(harmonic_mean(0.0, 0.8), 0.0);
    }
}
