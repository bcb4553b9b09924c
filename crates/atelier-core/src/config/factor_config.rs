//! Factor analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for eigen-decomposition and varimax rotation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FactorConfig {
    /// Eigenvalue threshold for the Kaiser criterion. Default: 1.0.
    pub kaiser_threshold: Option<f64>,
    /// Varimax iteration cap. Default: 20.
    pub max_rotation_iterations: Option<usize>,
    /// Relative improvement below which varimax stops. Default: 1e-6.
    pub rotation_tolerance: Option<f64>,
    /// Decimals applied to every returned value. Default: 4.
    pub rounding_decimals: Option<u32>,
}

impl FactorConfig {
    /// Returns the effective Kaiser threshold, defaulting to 1.0.
    pub fn effective_kaiser_threshold(&self) -> f64 {
        self.kaiser_threshold
            .unwrap_or(constants::DEFAULT_KAISER_THRESHOLD)
    }

    /// Returns the effective varimax iteration cap, defaulting to 20.
    pub fn effective_max_rotation_iterations(&self) -> usize {
        self.max_rotation_iterations
            .unwrap_or(constants::DEFAULT_VARIMAX_MAX_ITERATIONS)
    }

    /// Returns the effective varimax tolerance, defaulting to 1e-6.
    pub fn effective_rotation_tolerance(&self) -> f64 {
        self.rotation_tolerance
            .unwrap_or(constants::DEFAULT_VARIMAX_TOLERANCE)
    }

    /// Returns the effective rounding precision, defaulting to 4.
    pub fn effective_rounding_decimals(&self) -> u32 {
        self.rounding_decimals
            .unwrap_or(constants::DEFAULT_ROUNDING_DECIMALS)
    }
}
