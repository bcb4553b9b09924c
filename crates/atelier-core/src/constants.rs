//! Shared constants for the Atelier analysis engine.

/// Atelier version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Ranking / weighting ----

/// Score assigned to the first ranked item.
pub const SRF_BASE_SCORE: f64 = 1.0;

/// Score increase for each rank step between consecutive items.
pub const SRF_RANK_STEP: f64 = 1.0;

/// Additional score increase contributed by each gap token.
pub const SRF_GAP_STEP: f64 = 1.0;

/// Default decimals used when rendering weights for export.
pub const DEFAULT_EXPORT_DECIMALS: usize = 6;

/// Tokens recognised as gap markers in a raw ranking submission (lowercase).
pub const GAP_TOKENS: [&str; 2] = ["gap", "white"];

// ---- Clustering ----

/// Default number of scenario clusters.
pub const DEFAULT_CLUSTER_COUNT: usize = 3;

/// Default k-means iteration cap.
pub const DEFAULT_KMEANS_MAX_ITERATIONS: usize = 25;

/// Default number of top-ranked items kept per scenario.
pub const DEFAULT_SCENARIO_TOP_N: usize = 3;

// ---- Factor analysis ----

/// Kaiser criterion: retain factors whose eigenvalue exceeds this value.
pub const DEFAULT_KAISER_THRESHOLD: f64 = 1.0;

/// Default varimax iteration cap.
pub const DEFAULT_VARIMAX_MAX_ITERATIONS: usize = 20;

/// Default relative-improvement tolerance for varimax convergence.
pub const DEFAULT_VARIMAX_TOLERANCE: f64 = 1e-6;

/// Default decimals applied to factor analysis outputs.
pub const DEFAULT_ROUNDING_DECIMALS: u32 = 4;

/// Upper bound accepted for any configured rounding precision.
pub const MAX_ROUNDING_DECIMALS: u32 = 12;

// ---- Tolerances ----

/// Variance at or below this value is treated as zero.
pub const ZERO_VARIANCE_EPSILON: f64 = 1e-12;
