//! Scenario clustering configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for k-means scenario extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Requested number of clusters `k`. Default: 3.
    pub cluster_count: Option<usize>,
    /// Iteration cap for centroid assignment. Default: 25.
    pub max_iterations: Option<usize>,
    /// Items kept in each scenario's `top_n`. Default: 3.
    pub top_n: Option<usize>,
}

impl ClusteringConfig {
    /// Returns the effective cluster count, defaulting to 3.
    pub fn effective_cluster_count(&self) -> usize {
        self.cluster_count
            .unwrap_or(constants::DEFAULT_CLUSTER_COUNT)
    }

    /// Returns the effective iteration cap, defaulting to 25.
    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations
            .unwrap_or(constants::DEFAULT_KMEANS_MAX_ITERATIONS)
    }

    /// Returns the effective top-n size, defaulting to 3.
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(constants::DEFAULT_SCENARIO_TOP_N)
    }
}
