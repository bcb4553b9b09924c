//! Output snapshot of one batch recompute.

use serde::{Deserialize, Serialize};

use super::{ClusterAssignment, CorrelationMatrix, FactorResult, Scenario};

/// Non-fatal problems found in one participant's distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantIssues {
    pub participant_id: String,
    pub messages: Vec<String>,
}

/// Everything a recompute produces, for the caller to persist as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub assignment: ClusterAssignment,
    pub scenarios: Vec<Scenario>,
    pub participant_correlation: CorrelationMatrix,
    pub scenario_correlation: CorrelationMatrix,
    pub factors: FactorResult,
    pub issues: Vec<ParticipantIssues>,
}

impl AnalysisReport {
    /// Report for a project with no sorts yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Encode for the collaborator's API response.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
