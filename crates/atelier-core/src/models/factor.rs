//! Exploratory factor analysis results.

use serde::{Deserialize, Serialize};

/// Eigenvalues, retained factor count and loadings. All values are rounded
/// to the configured precision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    pub participants: Vec<String>,
    /// Every eigenvalue, descending.
    pub eigenvalues: Vec<f64>,
    /// Kaiser criterion, floored at 1 for any nonempty input.
    pub n_factors: usize,
    /// Participant rows × factor columns.
    pub loadings: Vec<Vec<f64>>,
    /// `loadings` after varimax rotation.
    pub rotated_loadings: Vec<Vec<f64>>,
    /// Share of total variance per retained factor.
    pub explained_variance: Vec<f64>,
    /// Row sums of squared rotated loadings.
    pub communalities: Vec<f64>,
    pub rotation_iterations: usize,
}

impl FactorResult {
    /// Result for "nothing to analyze yet": zero factors.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
