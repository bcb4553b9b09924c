//! Vectorization: one participant's score buckets to a dense vector over
//! the registry.
//!
//! Buckets are applied in ascending numeric score order. When an item sits
//! in more than one bucket the first (lowest) score is kept and the
//! conflict is reported. Malformed buckets are skipped and reported without
//! affecting the others.

use atelier_core::config::VectorizeConfig;
use atelier_core::models::{Distribution, ItemRegistry, ParticipantSort};
use atelier_core::tracing::events;
use atelier_core::{Partial, ValidationError};

/// A participant's vector together with its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantVector {
    pub participant_id: String,
    pub label: String,
    pub scores: Vec<f64>,
}

/// Build the score vector for `distribution`. Items absent from every
/// bucket score 0.
pub fn vectorize(
    distribution: &Distribution,
    registry: &ItemRegistry,
    config: &VectorizeConfig,
) -> Partial<Vec<f64>> {
    let mut result = Partial::new(vec![0.0; registry.len()]);
    let mut assigned: Vec<Option<i64>> = vec![None; registry.len()];

    let mut buckets = Vec::with_capacity(distribution.buckets.len());
    for (label, items) in &distribution.buckets {
        match label.trim().parse::<i64>() {
            Ok(score) => buckets.push((score, items)),
            Err(_) => result.add_error(ValidationError::InvalidScoreLabel {
                label: label.clone(),
            }),
        }
    }
    // Stable: equal scores keep label order.
    buckets.sort_by_key(|(score, _)| *score);

    for (score, items) in buckets {
        if let Some((min, max)) = config.score_range() {
            if score < min || score > max {
                result.add_error(ValidationError::ScoreOutOfRange { score, min, max });
                continue;
            }
        }
        for &item_id in items {
            let Some(position) = registry.position(item_id) else {
                result.add_error(ValidationError::UnknownItem { item_id });
                continue;
            };
            match assigned[position] {
                None => {
                    assigned[position] = Some(score);
                    result.data[position] = score as f64;
                }
                Some(kept) if kept == score => {}
                Some(kept) => result.add_error(ValidationError::DuplicateAssignment {
                    item_id,
                    kept_score: kept,
                    ignored_score: score,
                }),
            }
        }
    }

    result
}

/// Vectorize one submitted sort, logging every skipped fragment.
pub fn vectorize_sort(
    sort: &ParticipantSort,
    registry: &ItemRegistry,
    config: &VectorizeConfig,
) -> Partial<ParticipantVector> {
    let (scores, errors) = vectorize(&sort.distribution, registry, config).into_parts();
    for error in &errors {
        events::input_skipped(&sort.participant_id, error);
    }
    Partial {
        data: ParticipantVector {
            participant_id: sort.participant_id.clone(),
            label: sort.participant_label.clone(),
            scores,
        },
        errors,
    }
}
