//! atelier-analysis: the quantitative core of the Atelier workshop tool.
//!
//! - Ranking: SRF/Simos weights from an ordinal ranking with gap markers
//! - Vectorize: Q-sort distributions to dense score vectors
//! - Correlation: pairwise Pearson matrices over participants or scenarios
//! - Clustering: deterministic k-means and scenario synthesis
//! - Factor: Kaiser-selected principal factors with varimax rotation
//! - Pipeline: the full batch recompute over a project snapshot
//!
//! Every entry point is a pure, synchronous function of its inputs.

pub mod clustering;
pub mod correlation;
pub mod factor;
pub mod numeric;
pub mod pipeline;
pub mod ranking;
pub mod vectorize;

pub use clustering::{build_scenarios, KMeans};
pub use correlation::correlation_matrix;
pub use factor::FactorAnalysis;
pub use pipeline::ScenarioPipeline;
pub use ranking::compute_weights;
pub use vectorize::{vectorize, vectorize_sort, ParticipantVector};
