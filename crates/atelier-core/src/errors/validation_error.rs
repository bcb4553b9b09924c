//! Validation errors for malformed ranking and distribution input.

use super::error_code::{self, AtelierErrorCode};
use crate::models::ItemId;

/// Malformed or empty input. Reported to the caller, never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("ranking contains no items")]
    EmptyRanking,

    #[error("invalid ranking token: {token:?}")]
    InvalidToken { token: String },

    #[error("score label {label:?} is not an integer")]
    InvalidScoreLabel { label: String },

    #[error("score {score} outside allowed range {min}..={max}")]
    ScoreOutOfRange { score: i64, min: i64, max: i64 },

    #[error("item {item_id} is not in the registry")]
    UnknownItem { item_id: ItemId },

    #[error("item {item_id} assigned to score {kept_score} and again to {ignored_score}; keeping {kept_score}")]
    DuplicateAssignment {
        item_id: ItemId,
        kept_score: i64,
        ignored_score: i64,
    },

    #[error("item {item_id} registered more than once")]
    DuplicateRegistryItem { item_id: ItemId },
}

impl AtelierErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
