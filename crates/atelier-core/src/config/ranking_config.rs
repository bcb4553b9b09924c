//! Ranking / weighting configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the SRF weighting engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankingConfig {
    /// Decimals used when rendering weights for export. Default: 6.
    pub export_decimals: Option<usize>,
}

impl RankingConfig {
    /// Returns the effective export precision, defaulting to 6.
    pub fn effective_export_decimals(&self) -> usize {
        self.export_decimals
            .unwrap_or(constants::DEFAULT_EXPORT_DECIMALS)
    }
}
