//! Top-level Atelier configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClusteringConfig, FactorConfig, RankingConfig, VectorizeConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Project config file name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "atelier.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ATELIER_*`)
/// 3. Project config (`atelier.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AtelierConfig {
    pub ranking: RankingConfig,
    pub vectorize: VectorizeConfig,
    pub clustering: ClusteringConfig,
    pub factor: FactorConfig,
}

/// Per-request overrides supplied by the hosting application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub cluster_count: Option<usize>,
    pub kmeans_max_iterations: Option<usize>,
    pub varimax_max_iterations: Option<usize>,
    pub rounding_decimals: Option<u32>,
}

impl AtelierConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &AtelierConfig) -> Result<(), ConfigError> {
        if config.clustering.cluster_count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.cluster_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.clustering.max_iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.max_iterations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.clustering.top_n == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.top_n".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.factor.max_rotation_iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "factor.max_rotation_iterations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(tolerance) = config.factor.rotation_tolerance {
            if !(tolerance.is_finite() && tolerance > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "factor.rotation_tolerance".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(threshold) = config.factor.kaiser_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "factor.kaiser_threshold".to_string(),
                    message: "must be a non-negative finite number".to_string(),
                });
            }
        }
        if let Some(decimals) = config.factor.rounding_decimals {
            if decimals > constants::MAX_ROUNDING_DECIMALS {
                return Err(ConfigError::ValidationFailed {
                    field: "factor.rounding_decimals".to_string(),
                    message: format!("must be at most {}", constants::MAX_ROUNDING_DECIMALS),
                });
            }
        }
        if let Some((min, max)) = config.vectorize.score_range() {
            if min > max {
                return Err(ConfigError::ValidationFailed {
                    field: "vectorize.min_score".to_string(),
                    message: "must not exceed vectorize.max_score".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AtelierConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AtelierConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut AtelierConfig, other: &AtelierConfig) {
        // Ranking
        if other.ranking.export_decimals.is_some() {
            base.ranking.export_decimals = other.ranking.export_decimals;
        }

        // Vectorize
        if other.vectorize.min_score.is_some() {
            base.vectorize.min_score = other.vectorize.min_score;
        }
        if other.vectorize.max_score.is_some() {
            base.vectorize.max_score = other.vectorize.max_score;
        }

        // Clustering
        if other.clustering.cluster_count.is_some() {
            base.clustering.cluster_count = other.clustering.cluster_count;
        }
        if other.clustering.max_iterations.is_some() {
            base.clustering.max_iterations = other.clustering.max_iterations;
        }
        if other.clustering.top_n.is_some() {
            base.clustering.top_n = other.clustering.top_n;
        }

        // Factor
        if other.factor.kaiser_threshold.is_some() {
            base.factor.kaiser_threshold = other.factor.kaiser_threshold;
        }
        if other.factor.max_rotation_iterations.is_some() {
            base.factor.max_rotation_iterations = other.factor.max_rotation_iterations;
        }
        if other.factor.rotation_tolerance.is_some() {
            base.factor.rotation_tolerance = other.factor.rotation_tolerance;
        }
        if other.factor.rounding_decimals.is_some() {
            base.factor.rounding_decimals = other.factor.rounding_decimals;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ATELIER_CLUSTER_COUNT`, `ATELIER_ROUNDING_DECIMALS`, etc.
    fn apply_env_overrides(config: &mut AtelierConfig) {
        if let Ok(val) = std::env::var("ATELIER_CLUSTER_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.clustering.cluster_count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATELIER_KMEANS_MAX_ITERATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.clustering.max_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATELIER_VARIMAX_MAX_ITERATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.factor.max_rotation_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATELIER_ROUNDING_DECIMALS") {
            if let Ok(v) = val.parse::<u32>() {
                config.factor.rounding_decimals = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.cluster_count {
            self.clustering.cluster_count = Some(v);
        }
        if let Some(v) = overrides.kmeans_max_iterations {
            self.clustering.max_iterations = Some(v);
        }
        if let Some(v) = overrides.varimax_max_iterations {
            self.factor.max_rotation_iterations = Some(v);
        }
        if let Some(v) = overrides.rounding_decimals {
            self.factor.rounding_decimals = Some(v);
        }
    }

    /// Return a copy with `k` overridden, as requested per recompute.
    pub fn with_cluster_count(&self, k: usize) -> Self {
        let mut config = self.clone();
        config.clustering.cluster_count = Some(k);
        config
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
