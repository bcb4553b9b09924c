//! Q-sort vectorization configuration.

use serde::{Deserialize, Serialize};

/// Configuration for turning score-bucket distributions into vectors.
///
/// When both bounds are set, a bucket whose score falls outside
/// `min_score..=max_score` is skipped and reported as a non-fatal error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VectorizeConfig {
    /// Lowest accepted score label. Default: unbounded.
    pub min_score: Option<i64>,
    /// Highest accepted score label. Default: unbounded.
    pub max_score: Option<i64>,
}

impl VectorizeConfig {
    /// Returns the accepted score range, if one is fully configured.
    pub fn score_range(&self) -> Option<(i64, i64)> {
        match (self.min_score, self.max_score) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}
