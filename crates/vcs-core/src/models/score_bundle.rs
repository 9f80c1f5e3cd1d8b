use serde::{Deserialize, Serialize};

/// The four sub-scores of one evaluation. VCS is derived from these alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBundle {
    /// Semantic Alignment Score.
    pub sas: f64,
    /// Content Alignment Score.
    pub cas: f64,
    /// Narrative Alignment Score.
    pub nas: f64,
    /// Brevity Penalty.
    pub bp: f64,
}

impl ScoreBundle {
    /// Build a bundle, clamping every score to `[0, 1]`. NaN becomes 0.
    pub fn new(sas: f64, cas: f64, nas: f64, bp: f64) -> Self {
        Self {
            sas: unit(sas),
            cas: unit(cas),
            nas: unit(nas),
            bp: unit(bp),
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
