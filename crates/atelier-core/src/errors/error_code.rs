//! AtelierErrorCode trait for the API boundary.

/// Trait for converting Atelier errors to stable error codes.
/// Every error enum implements this so the hosting application can
/// surface a structured code next to the human-readable message.
pub trait AtelierErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted API error string: `[ERROR_CODE] message`.
    fn api_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the API boundary.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const INVALID_CLUSTER_COUNT: &str = "INVALID_CLUSTER_COUNT";
pub const NOT_SQUARE: &str = "NOT_SQUARE";
pub const DECOMPOSITION_FAILED: &str = "DECOMPOSITION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
