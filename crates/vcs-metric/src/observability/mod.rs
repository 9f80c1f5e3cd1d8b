//! Tracing initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vcs_core::config::ObservabilityConfig;
use vcs_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize tracing from the `VCS_LOG` environment variable.
///
/// Format: `VCS_LOG=vcs_metric=debug,vcs_embeddings=info`.
/// Falls back to `info` when unset or invalid. Idempotent; a subscriber
/// installed by the host application is left in place.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from an [`ObservabilityConfig`].
///
/// `VCS_LOG` still takes priority over `config.log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json_logs {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if installed.is_ok() {
            tracing::debug!(json = config.json_logs, "tracing initialized");
        }
    });
}
