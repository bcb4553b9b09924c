//! Scenario synthesis from a converged cluster assignment.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use atelier_core::models::{ClusterAssignment, ItemRegistry, RankedItem, Scenario};

use crate::vectorize::ParticipantVector;

/// One scenario per nonempty cluster, in cluster order.
///
/// The composite score of an item is the mean of its member scores. Items
/// are ranked descending by composite; equal composites keep registry order.
/// Titles are numbered over the nonempty clusters only.
pub fn build_scenarios(
    assignment: &ClusterAssignment,
    participants: &[ParticipantVector],
    registry: &ItemRegistry,
    top_n: usize,
) -> Vec<Scenario> {
    let mut scenarios = Vec::new();

    for cluster in 0..assignment.k {
        let members = assignment.members(cluster);
        if members.is_empty() {
            continue;
        }
        let composite = mean_vector(&members, participants, registry.len());

        let mut ranking: Vec<RankedItem> = registry
            .iter()
            .zip(&composite)
            .map(|(item, &score)| RankedItem {
                item_id: item.id,
                label: item.label.clone(),
                score,
            })
            .collect();
        ranking.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let composite_scores: BTreeMap<_, _> = registry
            .iter()
            .zip(&composite)
            .map(|(item, &score)| (item.id, score))
            .collect();

        let number = scenarios.len() + 1;
        scenarios.push(Scenario {
            id: format!("scenario-{number}"),
            title: format!("Scenario {number}"),
            description: describe(members.len()),
            cluster_index: cluster,
            members: members
                .iter()
                .map(|&i| participants[i].participant_id.clone())
                .collect(),
            top_n: ranking.iter().take(top_n).cloned().collect(),
            ranking,
            composite_scores,
        });
    }

    scenarios
}

/// Composite scores of `scenario` in registry order. Missing items score 0.
pub fn composite_vector(scenario: &Scenario, registry: &ItemRegistry) -> Vec<f64> {
    registry
        .iter()
        .map(|item| {
            scenario
                .composite_scores
                .get(&item.id)
                .copied()
                .unwrap_or(0.0)
        })
        .collect()
}

fn mean_vector(members: &[usize], participants: &[ParticipantVector], dimension: usize) -> Vec<f64> {
    let mut sums = vec![0.0; dimension];
    for &i in members {
        for (sum, score) in sums.iter_mut().zip(&participants[i].scores) {
            *sum += score;
        }
    }
    let n = members.len() as f64;
    sums.into_iter().map(|s| s / n).collect()
}

fn describe(members: usize) -> String {
    if members == 1 {
        "Composite of 1 participant sort".to_string()
    } else {
        format!("Composite of {members} participant sorts")
    }
}
