//! Clustering engine: scenario extraction from participant vectors.
//!
//! Deterministic k-means seeded with the first `k'` vectors in input order,
//! followed by a per-cluster composite ranking. Scenario output therefore
//! depends on the order participants submitted their sorts.

pub mod kmeans;
pub mod scenarios;

pub use kmeans::KMeans;
pub use scenarios::{build_scenarios, composite_vector};
