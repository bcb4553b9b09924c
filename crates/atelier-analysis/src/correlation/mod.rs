//! Correlation engine: pairwise Pearson correlation over subjects.
//!
//! Subjects are participants before clustering and scenario composites
//! after it; the routine does not care which. Undefined correlations
//! (zero-variance subjects, fewer than two items) become 0.

use statrs::statistics::Statistics;

use atelier_core::constants::ZERO_VARIANCE_EPSILON;
use atelier_core::models::CorrelationMatrix;
use atelier_core::tracing::events;
use atelier_core::AnalysisError;

use crate::numeric::finite_or_zero;

/// Pearson correlation of two equal-length series, `None` when undefined.
pub fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() || !has_variance(a) || !has_variance(b) {
        return None;
    }
    let r = a.iter().covariance(b.iter()) / (a.iter().std_dev() * b.iter().std_dev());
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Sample variance strictly above the zero threshold. NaN (n < 2) fails.
fn has_variance(values: &[f64]) -> bool {
    values.iter().variance() > ZERO_VARIANCE_EPSILON
}

/// Build the symmetric M×M matrix over `subjects`, labelled by `labels`.
///
/// Every subject must have the same length. Zero subjects yield the empty
/// matrix.
pub fn correlation_matrix(
    labels: Vec<String>,
    subjects: &[Vec<f64>],
) -> Result<CorrelationMatrix, AnalysisError> {
    if labels.len() != subjects.len() {
        return Err(AnalysisError::DimensionMismatch {
            expected: subjects.len(),
            actual: labels.len(),
        });
    }
    let Some(first) = subjects.first() else {
        return Ok(CorrelationMatrix::empty());
    };
    let dimension = first.len();
    if let Some(bad) = subjects.iter().find(|s| s.len() != dimension) {
        return Err(AnalysisError::DimensionMismatch {
            expected: dimension,
            actual: bad.len(),
        });
    }

    let m = subjects.len();
    let mut matrix = vec![vec![0.0; m]; m];
    let mut absorbed = 0usize;

    for i in 0..m {
        let defined = has_variance(&subjects[i]);
        matrix[i][i] = if defined { 1.0 } else { 0.0 };
        if !defined {
            absorbed += 1;
        }
        for j in (i + 1)..m {
            let (r, replaced) = match pearson(&subjects[i], &subjects[j]) {
                Some(r) => finite_or_zero(r),
                None => (0.0, true),
            };
            if replaced {
                absorbed += 1;
            }
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }

    if absorbed > 0 {
        events::non_finite_absorbed("correlation", absorbed);
    }

    Ok(CorrelationMatrix { labels, matrix })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn identical_vectors_correlate_at_one() {
        let v = vec![3.0, -1.0, 0.0, 2.0];
        let r = pearson(&v, &v).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negated_and_shifted_vectors_correlate_at_minus_one() {
        let v1 = vec![1.0, 2.0, 3.0, -2.0];
        let v2: Vec<f64> = v1.iter().map(|x| -x + 5.0).collect();
        let r = pearson(&v1, &v2).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_vector_is_undefined() {
        assert_eq!(pearson(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let subjects = vec![
            vec![1.0, 0.0, -1.0, 2.0],
            vec![0.0, 1.0, 2.0, -3.0],
            vec![2.0, 2.0, -1.0, 0.0],
        ];
        let cm = correlation_matrix(labels(3), &subjects).unwrap();
        for i in 0..3 {
            assert_eq!(cm.matrix[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(cm.matrix[i][j], cm.matrix[j][i]);
                assert!((-1.0..=1.0).contains(&cm.matrix[i][j]));
            }
        }
    }

    #[test]
    fn zero_variance_subject_gets_zero_row() {
        let subjects = vec![vec![0.0, 0.0, 0.0], vec![1.0, 2.0, 3.0]];
        let cm = correlation_matrix(labels(2), &subjects).unwrap();
        assert_eq!(cm.matrix, vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn empty_input_gives_empty_matrix() {
        let cm = correlation_matrix(vec![], &[]).unwrap();
        assert!(cm.is_empty());
        assert!(cm.matrix.is_empty());
    }

    #[test]
    fn ragged_input_is_rejected() {
        let err = correlation_matrix(labels(2), &[vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
        assert!(correlation_matrix(labels(1), &[vec![1.0], vec![2.0]]).is_err());
    }
}
