//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::errors::ValidationError;

/// Log a completed SRF weighting.
pub fn ranking_weighted(items: usize, gaps: usize, score_total: f64) {
    ::tracing::info!(
        event = "ranking_weighted",
        items = items,
        gaps = gaps,
        score_total = score_total,
        "ranking converted to weights"
    );
}

/// Log a non-fatal validation error that was skipped.
pub fn input_skipped(context: &str, error: &ValidationError) {
    ::tracing::warn!(
        event = "input_skipped",
        context = %context,
        error = %error,
        "malformed input fragment skipped"
    );
}

/// Log the end of a k-means run.
pub fn clustering_finished(k: usize, iterations: usize, converged: bool, nonempty: usize) {
    if converged {
        ::tracing::info!(
            event = "clustering_converged",
            k = k,
            iterations = iterations,
            nonempty_clusters = nonempty,
            "clustering converged"
        );
    } else {
        ::tracing::warn!(
            event = "clustering_iteration_cap",
            k = k,
            iterations = iterations,
            nonempty_clusters = nonempty,
            "clustering stopped at iteration cap"
        );
    }
}

/// Log a factor extraction.
pub fn factors_extracted(participants: usize, n_factors: usize, rotation_iterations: usize) {
    ::tracing::info!(
        event = "factors_extracted",
        participants = participants,
        n_factors = n_factors,
        rotation_iterations = rotation_iterations,
        "factor analysis completed"
    );
}

/// Log a numeric value replaced by a neutral one.
pub fn non_finite_absorbed(context: &str, count: usize) {
    ::tracing::debug!(
        event = "non_finite_absorbed",
        context = %context,
        count = count,
        "non-finite values replaced with 0"
    );
}
