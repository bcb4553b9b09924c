//! Ranking submissions and SRF weight results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemId;
use crate::constants;
use crate::errors::ValidationError;

/// One token of a submitted ranking sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum OrderEntry {
    Item(ItemId),
    /// A white card: extra preference distance before the next item.
    Gap,
}

impl OrderEntry {
    /// Parse a raw token: a gap marker (`gap`/`white`, any case) or an integer item id.
    pub fn from_token(token: &str) -> Result<Self, ValidationError> {
        let trimmed = token.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if constants::GAP_TOKENS.contains(&lowered.as_str()) {
            return Ok(Self::Gap);
        }
        trimmed
            .parse::<u64>()
            .map(|id| Self::Item(ItemId(id)))
            .map_err(|_| ValidationError::InvalidToken {
                token: token.to_string(),
            })
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

/// Parse a whole raw submission, failing on the first invalid token.
pub fn parse_order<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<OrderEntry>, ValidationError> {
    tokens
        .iter()
        .map(|t| OrderEntry::from_token(t.as_ref()))
        .collect()
}

/// Weight of one ranked item, with the ranking facts the caller stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedItem {
    pub item_id: ItemId,
    /// 1-based position among items (gaps are not counted).
    pub position: usize,
    /// Gap tokens immediately preceding this item.
    pub gaps_before: usize,
    /// Raw SRF score before normalization.
    pub score: f64,
    /// Normalized weight; all weights of a result sum to 1.0.
    pub weight: f64,
}

impl WeightedItem {
    /// Render the weight with fixed precision for export.
    pub fn display_weight(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.weight)
    }
}

/// Normalized weights for one ranking submission, in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightResult {
    pub items: Vec<WeightedItem>,
}

impl WeightResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn weight(&self, item_id: ItemId) -> Option<f64> {
        self.get(item_id).map(|w| w.weight)
    }

    pub fn get(&self, item_id: ItemId) -> Option<&WeightedItem> {
        self.items.iter().find(|w| w.item_id == item_id)
    }

    /// `{item_id: weight}` view for the collaborator's storage.
    pub fn as_map(&self) -> BTreeMap<ItemId, f64> {
        self.items.iter().map(|w| (w.item_id, w.weight)).collect()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|w| w.weight).sum()
    }
}
