//! Scenarios synthesized from participant clusters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// One entry of a scenario's composite ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub item_id: ItemId,
    pub label: String,
    pub score: f64,
}

/// Composite view of one nonempty cluster. Regenerated on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Cluster this scenario was built from.
    pub cluster_index: usize,
    /// Participant ids of the cluster members, in input order.
    pub members: Vec<String>,
    /// Every registry item, descending by composite score.
    pub ranking: Vec<RankedItem>,
    /// Leading entries of `ranking`.
    pub top_n: Vec<RankedItem>,
    pub composite_scores: BTreeMap<ItemId, f64>,
}
