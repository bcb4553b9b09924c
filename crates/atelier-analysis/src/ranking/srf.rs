//! Score assignment and normalization.

use std::collections::HashMap;

use atelier_core::constants::{SRF_BASE_SCORE, SRF_GAP_STEP, SRF_RANK_STEP};
use atelier_core::models::{ItemId, OrderEntry, WeightResult, WeightedItem};
use atelier_core::tracing::events;
use atelier_core::ValidationError;

/// Raw SRF score of one kept item occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem {
    pub item_id: ItemId,
    pub position: usize,
    pub gaps_before: usize,
    pub score: f64,
}

/// Assign raw scores in ranking order.
///
/// A repeated item id keeps only its last occurrence; the earlier score is
/// discarded and the item takes the later position.
pub fn score_order(order: &[OrderEntry]) -> Vec<ScoredItem> {
    let mut running = SRF_BASE_SCORE;
    let mut position = 0usize;
    let mut pending_gaps = 0usize;
    let mut scored: Vec<ScoredItem> = Vec::new();
    let mut seen: HashMap<ItemId, usize> = HashMap::new();

    for entry in order {
        match *entry {
            OrderEntry::Gap => {
                running += SRF_GAP_STEP;
                pending_gaps += 1;
            }
            OrderEntry::Item(item_id) => {
                position += 1;
                if let Some(previous) = seen.remove(&item_id) {
                    scored.remove(previous);
                    for index in seen.values_mut() {
                        if *index > previous {
                            *index -= 1;
                        }
                    }
                }
                seen.insert(item_id, scored.len());
                scored.push(ScoredItem {
                    item_id,
                    position,
                    gaps_before: pending_gaps,
                    score: running,
                });
                running += SRF_RANK_STEP;
                pending_gaps = 0;
            }
        }
    }

    scored
}

/// Convert a ranking into normalized weights summing to 1.0.
///
/// Fails with `ValidationError::EmptyRanking` when the sequence holds no
/// item tokens.
pub fn compute_weights(order: &[OrderEntry]) -> Result<WeightResult, ValidationError> {
    let scored = score_order(order);
    if scored.is_empty() {
        return Err(ValidationError::EmptyRanking);
    }

    let total: f64 = scored.iter().map(|s| s.score).sum();
    let gaps = order.iter().filter(|e| e.is_gap()).count();
    events::ranking_weighted(scored.len(), gaps, total);

    let items = scored
        .into_iter()
        .map(|s| WeightedItem {
            item_id: s.item_id,
            position: s.position,
            gaps_before: s.gaps_before,
            score: s.score,
            weight: s.score / total,
        })
        .collect();

    Ok(WeightResult { items })
}
