use serde::{Deserialize, Serialize};

use super::defaults;

/// Evaluation engine behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fan matrix construction and match selection out over rayon.
    pub parallel: bool,
    /// Attach the full `Internals` report to every evaluation.
    pub return_internals: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            return_internals: defaults::DEFAULT_RETURN_INTERNALS,
        }
    }
}
