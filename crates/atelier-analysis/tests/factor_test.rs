//! Tests for the factor analysis engine.

use atelier_analysis::{correlation_matrix, FactorAnalysis};
use atelier_core::models::CorrelationMatrix;

fn equicorrelated(m: usize, rho: f64) -> CorrelationMatrix {
    CorrelationMatrix {
        labels: (1..=m).map(|i| format!("P{i}")).collect(),
        matrix: (0..m)
            .map(|i| (0..m).map(|j| if i == j { 1.0 } else { rho }).collect())
            .collect(),
    }
}

#[test]
fn eigenvalues_sum_to_participant_count() {
    let subjects = vec![
        vec![3.0, 1.0, 0.0, -1.0, -3.0, 2.0],
        vec![2.0, 3.0, -1.0, 0.0, -2.0, 1.0],
        vec![-3.0, 0.0, 1.0, 2.0, 3.0, -1.0],
        vec![0.0, 2.0, 3.0, -3.0, 1.0, -2.0],
    ];
    let labels = (1..=4).map(|i| format!("P{i}")).collect();
    let cm = correlation_matrix(labels, &subjects).unwrap();
    let result = FactorAnalysis::new().analyze(&cm).unwrap();

    let trace: f64 = result.eigenvalues.iter().sum();
    assert!((trace - 4.0).abs() < 1e-3);
    assert!(result.n_factors >= 1);
    assert!(result.n_factors <= 4);
    for pair in result.eigenvalues.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn single_strong_factor_is_retained() {
    // Eigenvalues of a 3x3 equicorrelated matrix: 1 + 2ρ and (1 - ρ) twice.
    let result = FactorAnalysis::new().analyze(&equicorrelated(3, 0.5)).unwrap();
    assert_eq!(result.eigenvalues, vec![2.0, 0.5, 0.5]);
    assert_eq!(result.n_factors, 1);
    for row in &result.loadings {
        assert_eq!(row, &vec![0.8165]);
    }
    assert_eq!(result.explained_variance, vec![0.6667]);
    assert_eq!(result.communalities, vec![0.6667; 3]);
}

#[test]
fn outputs_follow_rounding_precision() {
    let result = FactorAnalysis::new()
        .with_rounding_decimals(2)
        .analyze(&equicorrelated(3, 0.5))
        .unwrap();
    assert_eq!(result.loadings, vec![vec![0.82]; 3]);
    assert_eq!(result.explained_variance, vec![0.67]);
}

#[test]
fn uncorrelated_participants_still_get_one_factor() {
    let result = FactorAnalysis::new().analyze(&equicorrelated(4, 0.0)).unwrap();
    assert_eq!(result.n_factors, 1);
    assert_eq!(result.eigenvalues, vec![1.0; 4]);
    assert_eq!(result.participants, vec!["P1", "P2", "P3", "P4"]);
}

#[test]
fn two_blocks_produce_two_rotated_factors() {
    let mut cm = equicorrelated(4, 0.0);
    cm.matrix[0][1] = 0.9;
    cm.matrix[1][0] = 0.9;
    cm.matrix[2][3] = 0.6;
    cm.matrix[3][2] = 0.6;
    let result = FactorAnalysis::new().analyze(&cm).unwrap();
    assert_eq!(result.n_factors, 2);
    assert_eq!(result.rotated_loadings.len(), 4);
    for row in &result.rotated_loadings {
        assert_eq!(row.len(), 2);
        let dominant = row[0].abs().max(row[1].abs());
        let minor = row[0].abs().min(row[1].abs());
        assert!(dominant > 0.85);
        assert!(minor < 0.05);
    }
    assert_eq!(result.communalities, vec![0.95, 0.95, 0.8, 0.8]);
    // Block loadings are already simple, so rotation stops before the cap.
    assert!(result.rotation_iterations >= 1);
    assert!(result.rotation_iterations < 20);
}
