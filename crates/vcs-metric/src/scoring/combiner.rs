//! Gated-ratio cascade: SAS → Scaled SAS → VAD → VCS.
//!
//! Every stage has the same shape: if the value cannot clear the complement
//! of its bound the stage outputs 0, otherwise the surplus is rescaled by the
//! bound. A zero at any stage propagates to the end.

use serde::{Deserialize, Serialize};
use vcs_core::models::ScoreBundle;

/// `(value − (1 − bound)) / bound`, or 0 when `bound ≤ 0` or the value does
/// not clear `1 − bound`. Never fails, never returns NaN for finite input.
pub fn gated_ratio(value: f64, bound: f64) -> f64 {
    if bound <= 0.0 || bound.is_nan() || value.is_nan() {
        return 0.0;
    }
    let surplus = value - (1.0 - bound);
    if surplus <= 0.0 {
        return 0.0;
    }
    // Cancellation in `1 − bound` can overshoot for tiny bounds.
    (surplus / bound).min(1.0)
}

/// Stage 1: SAS gated by CAS.
pub fn scaled_sas(sas: f64, cas: f64) -> f64 {
    gated_ratio(sas, cas)
}

/// Stage 2: the smaller of Scaled SAS and NAS gated by the larger.
pub fn vad(scaled_sas: f64, nas: f64) -> f64 {
    if scaled_sas <= nas {
        gated_ratio(scaled_sas, nas)
    } else {
        gated_ratio(nas, scaled_sas)
    }
}

/// Stage 3: VAD gated by the brevity penalty.
pub fn vcs(vad: f64, bp: f64) -> f64 {
    gated_ratio(vad, bp)
}

/// The three cascade outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cascade {
    pub scaled_sas: f64,
    pub vad: f64,
    pub vcs: f64,
}

/// Run the full cascade over a score bundle.
pub fn combine(bundle: &ScoreBundle) -> Cascade {
    let scaled_sas = scaled_sas(bundle.sas, bundle.cas);
    let vad = vad(scaled_sas, bundle.nas);
    let vcs = vcs(vad, bundle.bp);
    tracing::debug!(
        sas = bundle.sas,
        cas = bundle.cas,
        nas = bundle.nas,
        bp = bundle.bp,
        scaled_sas,
        vad,
        vcs,
        "score cascade"
    );
    Cascade {
        scaled_sas,
        vad,
        vcs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bound_gives_zero() {
        assert_eq!(gated_ratio(0.9, 0.0), 0.0);
        assert_eq!(gated_ratio(0.9, -0.5), 0.0);
    }

    #[test]
    fn value_at_complement_is_gated() {
        // 0.3 − (1 − 0.7) = 0 → closed.
        assert_eq!(gated_ratio(0.3, 0.7), 0.0);
        assert!(gated_ratio(0.31, 0.7) > 0.0);
    }

    #[test]
    fn perfect_inputs_give_one() {
        assert_eq!(gated_ratio(1.0, 1.0), 1.0);
        let c = combine(&ScoreBundle::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(c, Cascade { scaled_sas: 1.0, vad: 1.0, vcs: 1.0 });
    }

    #[test]
    fn uniform_085_cascade() {
        let c = combine(&ScoreBundle::new(0.85, 0.85, 0.85, 0.85));
        assert!((c.scaled_sas - 0.8235).abs() < 1e-4, "{c:?}");
        assert!((c.vad - 0.7924).abs() < 1e-4, "{c:?}");
        assert!((c.vcs - 0.7558).abs() < 1e-4, "{c:?}");
    }

    #[test]
    fn vad_gates_smaller_by_larger() {
        assert_eq!(vad(0.9, 0.5), gated_ratio(0.5, 0.9));
        assert_eq!(vad(0.5, 0.9), gated_ratio(0.5, 0.9));
    }

    #[test]
    fn zero_propagates() {
        let c = combine(&ScoreBundle::new(0.2, 0.5, 0.9, 1.0));
        assert_eq!(c.scaled_sas, 0.0);
        assert_eq!(c.vad, 0.0);
        assert_eq!(c.vcs, 0.0);
    }
}
