use atelier_analysis::{compute_weights, correlation_matrix, FactorAnalysis, KMeans};
use atelier_core::models::{ItemId, OrderEntry};
use proptest::prelude::*;

fn order_strategy() -> impl Strategy<Value = Vec<OrderEntry>> {
    prop::collection::vec(
        prop_oneof![
            3 => (1u64..40).prop_map(|id| OrderEntry::Item(ItemId(id))),
            1 => Just(OrderEntry::Gap),
        ],
        1..30,
    )
}

fn subjects_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (2usize..7, 3usize..10).prop_flat_map(|(m, n)| {
        prop::collection::vec(prop::collection::vec(-4i32..=4, n), m)
            .prop_map(|rows| {
                rows.into_iter()
                    .map(|row| row.into_iter().map(f64::from).collect())
                    .collect()
            })
    })
}

fn labels(m: usize) -> Vec<String> {
    (0..m).map(|i| format!("P{i}")).collect()
}

proptest! {
    #[test]
    fn weights_sum_to_one(order in order_strategy()) {
        let has_item = order.iter().any(|e| !e.is_gap());
        match compute_weights(&order) {
            Ok(result) => {
                prop_assert!(has_item);
                prop_assert!((result.total_weight() - 1.0).abs() < 1e-9);
                for item in &result.items {
                    prop_assert!(item.weight > 0.0);
                }
            }
            Err(_) => prop_assert!(!has_item),
        }
    }

    #[test]
    fn later_items_never_weigh_less(order in order_strategy()) {
        if let Ok(result) = compute_weights(&order) {
            let mut items = result.items.clone();
            items.sort_by_key(|i| i.position);
            for pair in items.windows(2) {
                prop_assert!(pair[0].weight <= pair[1].weight);
            }
        }
    }

    #[test]
    fn correlation_is_symmetric_and_bounded(subjects in subjects_strategy()) {
        let cm = correlation_matrix(labels(subjects.len()), &subjects).unwrap();
        for i in 0..cm.size() {
            let d = cm.matrix[i][i];
            prop_assert!(d == 0.0 || d == 1.0);
            for j in 0..cm.size() {
                let r = cm.matrix[i][j];
                prop_assert!(r.is_finite());
                prop_assert!((-1.0..=1.0).contains(&r));
                prop_assert_eq!(r, cm.matrix[j][i]);
            }
        }
    }

    #[test]
    fn factor_count_is_bounded_and_trace_matches(subjects in subjects_strategy()) {
        let cm = correlation_matrix(labels(subjects.len()), &subjects).unwrap();
        let result = FactorAnalysis::new().analyze(&cm).unwrap();
        let m = subjects.len();
        prop_assert!(result.n_factors >= 1);
        prop_assert!(result.n_factors <= m);
        let trace: f64 = (0..m).map(|i| cm.matrix[i][i]).sum();
        let eigen_sum: f64 = result.eigenvalues.iter().sum();
        prop_assert!((eigen_sum - trace).abs() < 1e-3);
        prop_assert_eq!(result.rotated_loadings.len(), m);
    }

    #[test]
    fn kmeans_labels_are_in_range(subjects in subjects_strategy(), k in 1usize..6) {
        let assignment = KMeans::new(k).fit(&subjects).unwrap();
        prop_assert_eq!(assignment.labels.len(), subjects.len());
        prop_assert!(assignment.k <= k);
        for &label in &assignment.labels {
            prop_assert!(label < assignment.k);
        }
    }
}
