//! Tests for tracing setup and structured events.

use atelier_core::tracing::{events, init_tracing, init_tracing_with_filter};
use atelier_core::{ItemId, ValidationError};

#[test]
fn repeated_initialization_is_a_no_op() {
    init_tracing_with_filter("atelier=debug");
    init_tracing();
    init_tracing_with_filter("atelier=trace");
}

#[test]
fn events_emit_without_a_subscriber_or_with_one() {
    events::ranking_weighted(3, 1, 7.0);
    events::input_skipped("p1", &ValidationError::UnknownItem { item_id: ItemId(9) });

    init_tracing_with_filter("atelier=debug");
    events::clustering_finished(3, 4, true, 2);
    events::clustering_finished(3, 25, false, 3);
    events::factors_extracted(5, 2, 6);
    events::non_finite_absorbed("correlation", 2);
}
