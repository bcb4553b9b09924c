//! Deterministic k-means with first-k seeding.

use atelier_core::config::ClusteringConfig;
use atelier_core::constants::{DEFAULT_CLUSTER_COUNT, DEFAULT_KMEANS_MAX_ITERATIONS};
use atelier_core::models::ClusterAssignment;
use atelier_core::tracing::events;
use atelier_core::AnalysisError;

/// K-means clusterer. No random seeding: centroids start as the first
/// `min(k, M)` input vectors.
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_KMEANS_MAX_ITERATIONS,
        }
    }

    /// Cap on assignment passes. At least one pass always runs.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn from_config(config: &ClusteringConfig) -> Self {
        Self::new(config.effective_cluster_count())
            .with_max_iterations(config.effective_max_iterations())
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Partition `vectors` into at most `k` clusters.
    ///
    /// A cluster that loses all members keeps its previous centroid.
    pub fn fit(&self, vectors: &[Vec<f64>]) -> Result<ClusterAssignment, AnalysisError> {
        if self.k == 0 {
            return Err(AnalysisError::InvalidClusterCount { requested: self.k });
        }
        let Some(first) = vectors.first() else {
            return Ok(ClusterAssignment {
                converged: true,
                ..ClusterAssignment::default()
            });
        };
        let dimension = first.len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(AnalysisError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }

        let k = self.k.min(vectors.len());
        let mut centroids: Vec<Vec<f64>> = vectors[..k].to_vec();
        let mut labels: Option<Vec<usize>> = None;
        let mut iterations = 0;
        let mut converged = false;

        for _ in 0..self.max_iterations {
            iterations += 1;
            let next: Vec<usize> = vectors.iter().map(|v| nearest(&centroids, v)).collect();
            let changed = labels.as_ref() != Some(&next);
            update_centroids(&mut centroids, vectors, &next);
            labels = Some(next);
            if !changed {
                converged = true;
                break;
            }
        }

        let assignment = ClusterAssignment {
            k,
            labels: labels.unwrap_or_default(),
            centroids,
            iterations,
            converged,
        };
        events::clustering_finished(k, iterations, converged, assignment.nonempty_clusters());
        Ok(assignment)
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTER_COUNT)
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Index of the closest centroid; ties go to the lowest index.
fn nearest(centroids: &[Vec<f64>], v: &[f64]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let d = squared_distance(centroid, v);
        if d < best_distance {
            best = index;
            best_distance = d;
        }
    }
    best
}

fn update_centroids(centroids: &mut [Vec<f64>], vectors: &[Vec<f64>], labels: &[usize]) {
    for (cluster, centroid) in centroids.iter_mut().enumerate() {
        let members: Vec<&Vec<f64>> = vectors
            .iter()
            .zip(labels)
            .filter(|&(_, &label)| label == cluster)
            .map(|(v, _)| v)
            .collect();
        if members.is_empty() {
            continue;
        }
        let n = members.len() as f64;
        for (d, value) in centroid.iter_mut().enumerate() {
            *value = members.iter().map(|m| m[d]).sum::<f64>() / n;
        }
    }
}
