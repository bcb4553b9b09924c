//! Cluster assignment produced by k-means.

use serde::{Deserialize, Serialize};

/// Participant index → cluster index in `[0, k')`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    /// Effective cluster count `k' = min(k, participants)`.
    pub k: usize,
    /// `labels[i]` is the cluster of participant `i`.
    pub labels: Vec<usize>,
    /// Final centroid of every cluster, including empty ones.
    pub centroids: Vec<Vec<f64>>,
    /// Assignment passes run.
    pub iterations: usize,
    /// Whether the run stopped because no assignment changed.
    pub converged: bool,
}

impl ClusterAssignment {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Participant indices in `cluster`, in input order.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == cluster)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of members per cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    pub fn nonempty_clusters(&self) -> usize {
        self.sizes().iter().filter(|&&n| n > 0).count()
    }
}
