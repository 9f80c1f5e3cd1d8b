//! Sub-scores (CAS, NAS, BP) and the cascade that turns them into VCS.

pub mod brevity;
pub mod combiner;
pub mod las;
pub mod nas;

pub use brevity::brevity_penalty;
pub use combiner::{combine, gated_ratio, scaled_sas, vad, vcs, Cascade};
pub use las::{harmonic_mean, local_alignment_score, LocalAlignment};
pub use nas::{NarrativeAlignment, NasDirection};
