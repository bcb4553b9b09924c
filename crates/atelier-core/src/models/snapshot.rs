//! Immutable input snapshot for one batch recompute.

use serde::{Deserialize, Serialize};

use super::{ItemRegistry, ParticipantSort};

/// Everything a scenario recompute reads. The engine never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub items: ItemRegistry,
    pub sorts: Vec<ParticipantSort>,
}

impl ProjectSnapshot {
    pub fn new(items: ItemRegistry, sorts: Vec<ParticipantSort>) -> Self {
        Self { items, sorts }
    }

    pub fn participant_count(&self) -> usize {
        self.sorts.len()
    }
}
