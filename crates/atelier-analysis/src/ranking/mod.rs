//! Ranking / weighting engine: SRF (Simos-Roy-Figueira) procedure.
//!
//! A running score starts at 1.0 and is assigned to the first item. Each
//! subsequent item adds one rank step; each gap token adds a further step
//! before the next item. Gaps accumulate across the whole sequence. The
//! weight of an item is its score divided by the sum of all scores.

pub mod srf;

pub use srf::{compute_weights, score_order};
