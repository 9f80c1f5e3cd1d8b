//! Top-level VCS configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AlignmentConfig, EmbeddingConfig, EngineConfig, ObservabilityConfig};
use crate::constants::{MAX_CHUNK_SIZE, MAX_EMBEDDING_DIMENSIONS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VCS_*`)
/// 2. Config file passed to [`VcsConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VcsConfig {
    pub alignment: AlignmentConfig,
    pub embedding: EmbeddingConfig,
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

impl VcsConfig {
    /// Load configuration from a TOML file, apply `VCS_*` environment
    /// overrides, and validate the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let mut config: VcsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    /// Missing sections and fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Recognised keys: `VCS_CHUNK_SIZE`, `VCS_CUTOFF`, `VCS_WINDOW_CONTROL`,
    /// `VCS_LCT`, `VCS_EMBEDDING_MODEL`.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("VCS_CHUNK_SIZE") {
            self.alignment.chunk_size = parse_env("VCS_CHUNK_SIZE", &v)?;
        }
        if let Some(v) = lookup("VCS_CUTOFF") {
            self.alignment.context_cutoff_value = parse_env("VCS_CUTOFF", &v)?;
        }
        if let Some(v) = lookup("VCS_WINDOW_CONTROL") {
            self.alignment.context_window_control = parse_env("VCS_WINDOW_CONTROL", &v)?;
        }
        if let Some(v) = lookup("VCS_LCT") {
            self.alignment.lct = parse_env("VCS_LCT", &v)?;
        }
        if let Some(v) = lookup("VCS_EMBEDDING_MODEL") {
            self.embedding.model = v;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.alignment;
        if a.chunk_size == 0 || a.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::ValidationFailed {
                field: "alignment.chunk_size".to_string(),
                message: format!("must be between 1 and {MAX_CHUNK_SIZE}"),
            });
        }
        if !(a.context_cutoff_value > 0.0 && a.context_cutoff_value < 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "alignment.context_cutoff_value".to_string(),
                message: "must be strictly between 0.0 and 1.0".to_string(),
            });
        }
        if !(a.context_window_control.is_finite() && a.context_window_control > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "alignment.context_window_control".to_string(),
                message: "must be a finite value greater than 0".to_string(),
            });
        }
        let e = &self.embedding;
        if e.dimensions == 0 || e.dimensions > MAX_EMBEDDING_DIMENSIONS {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: format!("must be between 1 and {MAX_EMBEDDING_DIMENSIONS}"),
            });
        }
        if e.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ValidationFailed {
            field: key.to_string(),
            message: format!("cannot parse {value:?}"),
        })
}
