use std::collections::HashMap;

use vcs_core::config::*;
use vcs_core::errors::{ConfigError, VcsErrorCode};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VcsConfig::from_toml("").unwrap();

    // Alignment defaults
    assert_eq!(config.alignment.chunk_size, 1);
    assert_eq!(config.alignment.context_cutoff_value, 0.6);
    assert_eq!(config.alignment.context_window_control, 5.0);
    assert_eq!(config.alignment.lct, 0);

    // Embedding defaults
    assert_eq!(config.embedding.model, "hashed-tfidf");
    assert_eq!(config.embedding.dimensions, 256);
    assert_eq!(config.embedding.cache_capacity, 10_000);

    // Engine defaults
    assert!(config.engine.parallel);
    assert!(config.engine.return_internals);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);

    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[alignment]
chunk_size = 2
lct = 1

[engine]
parallel = false
"#;
    let config = VcsConfig::from_toml(toml).unwrap();
    assert_eq!(config.alignment.chunk_size, 2);
    assert_eq!(config.alignment.lct, 1);
    // Non-overridden fields keep defaults
    assert_eq!(config.alignment.context_cutoff_value, 0.6);
    assert!(!config.engine.parallel);
    assert!(config.engine.return_internals);
}

#[test]
fn config_serde_roundtrip() {
    let config = VcsConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = VcsConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = VcsConfig::from_toml("[alignment\nchunk_size = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn zero_chunk_size_fails_validation() {
    let config = VcsConfig::from_toml("[alignment]\nchunk_size = 0").unwrap();
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "alignment.chunk_size"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn cutoff_outside_open_unit_interval_fails_validation() {
    for cutoff in ["0.0", "1.0", "1.5", "-0.2"] {
        let config =
            VcsConfig::from_toml(&format!("[alignment]\ncontext_cutoff_value = {cutoff}")).unwrap();
        assert!(config.validate().is_err(), "cutoff {cutoff} should be rejected");
    }
}

#[test]
fn non_positive_window_control_fails_validation() {
    let config = VcsConfig::from_toml("[alignment]\ncontext_window_control = 0.0").unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[test]
fn env_overrides_take_priority() {
    let env: HashMap<&str, &str> = [
        ("VCS_CHUNK_SIZE", "3"),
        ("VCS_CUTOFF", "0.7"),
        ("VCS_WINDOW_CONTROL", "4"),
        ("VCS_LCT", "2"),
        ("VCS_EMBEDDING_MODEL", "nv-embed-v2"),
    ]
    .into_iter()
    .collect();

    let mut config = VcsConfig::default();
    config
        .apply_overrides_from(|k| env.get(k).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.alignment.chunk_size, 3);
    assert_eq!(config.alignment.context_cutoff_value, 0.7);
    assert_eq!(config.alignment.context_window_control, 4.0);
    assert_eq!(config.alignment.lct, 2);
    assert_eq!(config.embedding.model, "nv-embed-v2");
}

#[test]
fn unparsable_env_override_is_rejected() {
    let mut config = VcsConfig::default();
    let err = config
        .apply_overrides_from(|k| (k == "VCS_LCT").then(|| "two".to_string()))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn load_reports_missing_file() {
    let err = VcsConfig::load(std::path::Path::new("/nonexistent/vcs.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn unreadable_path_is_not_reported_as_missing() {
    // A directory exists but cannot be read as a file.
    let dir = std::env::temp_dir();
    let err = VcsConfig::load(&dir).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed { .. }), "{err:?}");
    assert_eq!(err.error_code(), vcs_core::errors::error_code::CONFIG_ERROR);
}
