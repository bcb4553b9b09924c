//! Full batch recompute over a project snapshot.
//!
//! vectorize → participant correlation → k-means → scenarios →
//! scenario correlation → factor analysis. The snapshot is read-only; the
//! returned report replaces any previous one as a whole.

use tracing::info_span;

use atelier_core::config::AtelierConfig;
use atelier_core::constants::VERSION;
use atelier_core::models::{
    parse_order, AnalysisReport, ItemId, ParticipantIssues, ProjectSnapshot, WeightResult,
};
use atelier_core::AnalysisError;

use crate::clustering::{build_scenarios, composite_vector, KMeans};
use crate::correlation::correlation_matrix;
use crate::factor::FactorAnalysis;
use crate::ranking::compute_weights;
use crate::vectorize::{vectorize_sort, ParticipantVector};

/// Scenario-building pipeline bound to one resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct ScenarioPipeline {
    config: AtelierConfig,
}

impl ScenarioPipeline {
    pub fn new(config: AtelierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AtelierConfig {
        &self.config
    }

    /// Parse raw ranking tokens and convert them to SRF weights.
    pub fn rank<S: AsRef<str>>(&self, tokens: &[S]) -> Result<WeightResult, AnalysisError> {
        let order = parse_order(tokens)?;
        Ok(compute_weights(&order)?)
    }

    /// Weights rendered at the configured export precision, in ranking order.
    pub fn export_weights(&self, result: &WeightResult) -> Vec<(ItemId, String)> {
        let decimals = self.config.ranking.effective_export_decimals();
        result
            .items
            .iter()
            .map(|item| (item.item_id, item.display_weight(decimals)))
            .collect()
    }

    /// Recompute every derived result from `snapshot`.
    ///
    /// With no sorts the empty report is returned. Malformed buckets are
    /// reported in `issues` and do not stop the run.
    pub fn recompute(&self, snapshot: &ProjectSnapshot) -> Result<AnalysisReport, AnalysisError> {
        let _span = info_span!(
            "scenario_recompute",
            version = VERSION,
            participants = snapshot.participant_count(),
            items = snapshot.items.len()
        )
        .entered();

        if snapshot.sorts.is_empty() {
            tracing::info!("no participant sorts submitted yet");
            return Ok(AnalysisReport::empty());
        }

        let mut participants: Vec<ParticipantVector> = Vec::with_capacity(snapshot.sorts.len());
        let mut issues = Vec::new();
        for sort in &snapshot.sorts {
            let outcome = vectorize_sort(sort, &snapshot.items, &self.config.vectorize);
            if !outcome.is_clean() {
                issues.push(ParticipantIssues {
                    participant_id: sort.participant_id.clone(),
                    messages: outcome.errors.iter().map(ToString::to_string).collect(),
                });
            }
            participants.push(outcome.data);
        }

        let vectors: Vec<Vec<f64>> = participants.iter().map(|p| p.scores.clone()).collect();
        let labels: Vec<String> = participants.iter().map(|p| p.label.clone()).collect();
        let participant_correlation = correlation_matrix(labels, &vectors)?;

        let assignment = KMeans::from_config(&self.config.clustering).fit(&vectors)?;
        let scenarios = build_scenarios(
            &assignment,
            &participants,
            &snapshot.items,
            self.config.clustering.effective_top_n(),
        );

        let scenario_vectors: Vec<Vec<f64>> = scenarios
            .iter()
            .map(|s| composite_vector(s, &snapshot.items))
            .collect();
        let scenario_labels: Vec<String> = scenarios.iter().map(|s| s.title.clone()).collect();
        let scenario_correlation = correlation_matrix(scenario_labels, &scenario_vectors)?;

        let factors = FactorAnalysis::from_config(&self.config.factor).analyze(&participant_correlation)?;

        tracing::info!(
            scenarios = scenarios.len(),
            n_factors = factors.n_factors,
            issues = issues.len(),
            "scenario recompute finished"
        );

        Ok(AnalysisReport {
            assignment,
            scenarios,
            participant_correlation,
            scenario_correlation,
            factors,
            issues,
        })
    }
}
