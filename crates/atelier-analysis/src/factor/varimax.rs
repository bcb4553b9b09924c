//! Orthogonal varimax rotation.
//!
//! Each pass computes the SVD of the varimax criterion gradient
//! `Φᵀ (Λ³ − Λ·diag(ΛᵀΛ)/p)` and takes `U·Vᵀ` as the new accumulated
//! rotation. The sum of singular values tracks the criterion; the loop stops
//! once its relative improvement falls below the tolerance.

use nalgebra::DMatrix;

use atelier_core::AnalysisError;

/// Varimax corresponds to gamma = 1 in the orthomax family.
const GAMMA: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct VarimaxOutcome {
    pub rotated: DMatrix<f64>,
    pub rotation: DMatrix<f64>,
    /// Passes run; 0 when rotation was skipped.
    pub iterations: usize,
}

/// Rotate `loadings` (rows = variables, columns = factors).
///
/// With fewer than two factors the input is returned unchanged.
pub fn varimax(
    loadings: &DMatrix<f64>,
    max_iterations: usize,
    tolerance: f64,
) -> Result<VarimaxOutcome, AnalysisError> {
    let (p, k) = loadings.shape();
    if k < 2 || p == 0 {
        return Ok(VarimaxOutcome {
            rotated: loadings.clone(),
            rotation: DMatrix::identity(k, k),
            iterations: 0,
        });
    }

    let mut rotation = DMatrix::<f64>::identity(k, k);
    let mut criterion = 0.0;
    let mut iterations = 0;

    for _ in 0..max_iterations {
        let previous = criterion;
        let lambda = loadings * &rotation;
        let cubed = lambda.map(|x| x.powi(3));
        let column_ss: Vec<f64> = (0..k).map(|j| lambda.column(j).norm_squared()).collect();
        let shrink = DMatrix::from_fn(p, k, |i, j| lambda[(i, j)] * column_ss[j] * GAMMA / p as f64);
        let gradient = loadings.transpose() * (cubed - shrink);

        let svd = gradient.svd(true, true);
        let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
            return Err(AnalysisError::Decomposition {
                reason: "varimax SVD returned no singular vectors".to_string(),
            });
        };
        rotation = u * v_t;
        criterion = svd.singular_values.sum();
        iterations += 1;

        if previous != 0.0 && criterion / previous < 1.0 + tolerance {
            break;
        }
    }

    Ok(VarimaxOutcome {
        rotated: loadings * &rotation,
        rotation,
        iterations,
    })
}
