//! Factor analysis engine.
//!
//! Eigen-decomposes a participant correlation matrix, keeps factors by the
//! Kaiser criterion (eigenvalue > threshold, at least one), scales the
//! retained eigenvectors into loadings and applies varimax rotation.
//! Every returned value is rounded to the configured precision.

pub mod eigen;
pub mod varimax;

use nalgebra::DMatrix;

use atelier_core::config::FactorConfig;
use atelier_core::constants::{
    DEFAULT_KAISER_THRESHOLD, DEFAULT_ROUNDING_DECIMALS, DEFAULT_VARIMAX_MAX_ITERATIONS,
    DEFAULT_VARIMAX_TOLERANCE,
};
use atelier_core::models::{CorrelationMatrix, FactorResult};
use atelier_core::tracing::events;
use atelier_core::AnalysisError;

use crate::numeric::{finite_or_zero, round_rows, round_vec};

pub use eigen::{sorted_eigen, EigenPairs};
pub use varimax::{varimax, VarimaxOutcome};

/// Exploratory factor analysis with orthogonal rotation.
#[derive(Debug, Clone, Copy)]
pub struct FactorAnalysis {
    kaiser_threshold: f64,
    max_rotation_iterations: usize,
    rotation_tolerance: f64,
    rounding_decimals: u32,
}

impl FactorAnalysis {
    pub fn new() -> Self {
        Self {
            kaiser_threshold: DEFAULT_KAISER_THRESHOLD,
            max_rotation_iterations: DEFAULT_VARIMAX_MAX_ITERATIONS,
            rotation_tolerance: DEFAULT_VARIMAX_TOLERANCE,
            rounding_decimals: DEFAULT_ROUNDING_DECIMALS,
        }
    }

    pub fn from_config(config: &FactorConfig) -> Self {
        Self {
            kaiser_threshold: config.effective_kaiser_threshold(),
            max_rotation_iterations: config.effective_max_rotation_iterations(),
            rotation_tolerance: config.effective_rotation_tolerance(),
            rounding_decimals: config.effective_rounding_decimals(),
        }
    }

    pub fn with_max_rotation_iterations(mut self, iterations: usize) -> Self {
        self.max_rotation_iterations = iterations;
        self
    }

    pub fn with_rounding_decimals(mut self, decimals: u32) -> Self {
        self.rounding_decimals = decimals;
        self
    }

    /// Kaiser criterion: eigenvalues strictly above the threshold, floored
    /// at one and capped at the participant count.
    pub fn factor_count(&self, eigenvalues: &[f64]) -> usize {
        let above = eigenvalues
            .iter()
            .filter(|&&v| v > self.kaiser_threshold)
            .count();
        above.max(1).min(eigenvalues.len())
    }

    /// Analyze a square correlation matrix over participants.
    ///
    /// An empty matrix yields `FactorResult::empty()`. Non-finite entries
    /// are treated as 0.
    pub fn analyze(&self, correlation: &CorrelationMatrix) -> Result<FactorResult, AnalysisError> {
        let m = correlation.size();
        if correlation.matrix.len() != m {
            return Err(AnalysisError::NotSquare {
                rows: correlation.matrix.len(),
                cols: m,
            });
        }
        if let Some(row) = correlation.matrix.iter().find(|row| row.len() != m) {
            return Err(AnalysisError::NotSquare {
                rows: m,
                cols: row.len(),
            });
        }
        if m == 0 {
            return Ok(FactorResult::empty());
        }

        let mut absorbed = 0usize;
        let matrix = DMatrix::from_fn(m, m, |i, j| {
            let (value, replaced) = finite_or_zero(correlation.matrix[i][j]);
            if replaced {
                absorbed += 1;
            }
            value
        });
        if absorbed > 0 {
            events::non_finite_absorbed("factor_analysis", absorbed);
        }

        let pairs = sorted_eigen(matrix)?;
        let decimals = self.rounding_decimals;
        // Kaiser is judged on the eigenvalues as returned.
        let eigenvalues = round_vec(&pairs.values, decimals);
        let n_factors = self.factor_count(&eigenvalues);

        let loadings = DMatrix::from_fn(m, n_factors, |i, f| {
            pairs.vectors[(i, f)] * pairs.values[f].max(0.0).sqrt()
        });
        let rotation = varimax(&loadings, self.max_rotation_iterations, self.rotation_tolerance)?;

        let explained_variance: Vec<f64> = pairs.values[..n_factors]
            .iter()
            .map(|v| v / m as f64)
            .collect();
        let communalities: Vec<f64> = (0..m)
            .map(|i| rotation.rotated.row(i).iter().map(|x| x * x).sum::<f64>())
            .collect();

        events::factors_extracted(m, n_factors, rotation.iterations);

        Ok(FactorResult {
            participants: correlation.labels.clone(),
            eigenvalues,
            n_factors,
            loadings: round_rows(&to_rows(&loadings), decimals),
            rotated_loadings: round_rows(&to_rows(&rotation.rotated), decimals),
            explained_variance: round_vec(&explained_variance, decimals),
            communalities: round_vec(&communalities, decimals),
            rotation_iterations: rotation.iterations,
        })
    }
}

impl Default for FactorAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

fn to_rows(matrix: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..matrix.nrows())
        .map(|i| matrix.row(i).iter().copied().collect())
        .collect()
}
