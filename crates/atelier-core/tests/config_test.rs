//! Tests for the Atelier configuration system.

use std::sync::Mutex;

use atelier_core::config::atelier_config::{ConfigOverrides, PROJECT_CONFIG_FILE};
use atelier_core::config::AtelierConfig;
use atelier_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_atelier_env_vars() {
    for key in [
        "ATELIER_CLUSTER_COUNT",
        "ATELIER_KMEANS_MAX_ITERATIONS",
        "ATELIER_VARIMAX_MAX_ITERATIONS",
        "ATELIER_ROUNDING_DECIMALS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution_prefers_overrides_then_env_then_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_atelier_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        r#"
[clustering]
cluster_count = 4
max_iterations = 50

[factor]
rounding_decimals = 3
"#,
    )
    .unwrap();

    std::env::set_var("ATELIER_KMEANS_MAX_ITERATIONS", "10");
    std::env::set_var("ATELIER_ROUNDING_DECIMALS", "5");

    let overrides = ConfigOverrides {
        rounding_decimals: Some(2),
        ..Default::default()
    };
    let config = AtelierConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.clustering.cluster_count, Some(4));
    assert_eq!(config.clustering.max_iterations, Some(10));
    assert_eq!(config.factor.rounding_decimals, Some(2));

    clear_atelier_env_vars();
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_atelier_env_vars();

    let dir = tempdir();
    let config = AtelierConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.clustering.effective_cluster_count(), 3);
    assert_eq!(config.clustering.effective_max_iterations(), 25);
    assert_eq!(config.clustering.effective_top_n(), 3);
    assert_eq!(config.factor.effective_kaiser_threshold(), 1.0);
    assert_eq!(config.factor.effective_max_rotation_iterations(), 20);
    assert_eq!(config.factor.effective_rounding_decimals(), 4);
    assert_eq!(config.ranking.effective_export_decimals(), 6);
    assert_eq!(config.vectorize.score_range(), None);
}

#[test]
fn unparseable_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_atelier_env_vars();

    std::env::set_var("ATELIER_CLUSTER_COUNT", "many");
    let dir = tempdir();
    let config = AtelierConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.clustering.cluster_count, None);

    clear_atelier_env_vars();
}

#[test]
fn zero_cluster_count_from_env_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_atelier_env_vars();

    std::env::set_var("ATELIER_CLUSTER_COUNT", "0");
    let dir = tempdir();
    let err = AtelierConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "clustering.cluster_count"));

    clear_atelier_env_vars();
}

#[test]
fn malformed_file_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_atelier_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[clustering\ncluster_count = ").unwrap();
    let err = AtelierConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn from_toml_validates_ranges() {
    let err = AtelierConfig::from_toml("[vectorize]\nmin_score = 4\nmax_score = -4\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let err = AtelierConfig::from_toml("[factor]\nrounding_decimals = 40\n").unwrap_err();
    assert!(err.to_string().contains("factor.rounding_decimals"));

    let err = AtelierConfig::from_toml("[factor]\nrotation_tolerance = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = AtelierConfig::from_toml(
        "[clustering]\ncluster_count = 2\nlinkage = \"ward\"\n\n[export]\nformat = \"csv\"\n",
    )
    .unwrap();
    assert_eq!(config.clustering.effective_cluster_count(), 2);
}

#[test]
fn toml_round_trip_keeps_set_values() {
    let config = AtelierConfig::from_toml("[vectorize]\nmin_score = -4\nmax_score = 4\n")
        .unwrap()
        .with_cluster_count(5);
    let text = config.to_toml().unwrap();
    let reparsed = AtelierConfig::from_toml(&text).unwrap();
    assert_eq!(reparsed.vectorize.score_range(), Some((-4, 4)));
    assert_eq!(reparsed.clustering.cluster_count, Some(5));
}
