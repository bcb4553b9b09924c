//! Sorted symmetric eigen-decomposition.

use std::cmp::Ordering;

use nalgebra::{DMatrix, SymmetricEigen};

use atelier_core::AnalysisError;

/// Maximum QR sweeps before the decomposition is declared failed.
const MAX_EIGEN_SWEEPS: usize = 10_000;

/// Eigenvalues in descending order with eigenvectors as matching columns.
#[derive(Debug, Clone)]
pub struct EigenPairs {
    pub values: Vec<f64>,
    pub vectors: DMatrix<f64>,
}

/// Decompose a symmetric matrix and sort the pairs by descending eigenvalue.
///
/// Each eigenvector is sign-normalized so that its largest-magnitude
/// component is positive.
pub fn sorted_eigen(matrix: DMatrix<f64>) -> Result<EigenPairs, AnalysisError> {
    let n = matrix.nrows();
    let eigen = SymmetricEigen::try_new(matrix, f64::EPSILON, MAX_EIGEN_SWEEPS).ok_or_else(|| {
        AnalysisError::Decomposition {
            reason: format!("symmetric eigen-decomposition of {n}x{n} matrix did not converge"),
        }
    })?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[b]
            .partial_cmp(&eigen.eigenvalues[a])
            .unwrap_or(Ordering::Equal)
    });

    let values: Vec<f64> = order.iter().map(|&i| eigen.eigenvalues[i]).collect();
    let mut vectors = DMatrix::zeros(n, n);
    for (target, &source) in order.iter().enumerate() {
        let column = eigen.eigenvectors.column(source);
        let sign = dominant_sign(column.iter().copied());
        for row in 0..n {
            vectors[(row, target)] = column[row] * sign;
        }
    }

    Ok(EigenPairs { values, vectors })
}

fn dominant_sign(column: impl Iterator<Item = f64>) -> f64 {
    let mut dominant = 0.0f64;
    for value in column {
        if value.abs() > dominant.abs() {
            dominant = value;
        }
    }
    if dominant < 0.0 {
        -1.0
    } else {
        1.0
    }
}
