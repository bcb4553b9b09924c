//! Analysis engine errors.

use super::error_code::{self, AtelierErrorCode};
use super::ValidationError;

/// Errors raised by the analysis engine.
/// Numeric edge cases are absorbed in place and never reach this enum.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("cluster count must be at least 1, got {requested}")]
    InvalidClusterCount { requested: usize },

    #[error("correlation matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("decomposition failed: {reason}")]
    Decomposition { reason: String },
}

impl AtelierErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::InvalidClusterCount { .. } => error_code::INVALID_CLUSTER_COUNT,
            Self::NotSquare { .. } => error_code::NOT_SQUARE,
            Self::Decomposition { .. } => error_code::DECOMPOSITION_FAILED,
        }
    }
}
