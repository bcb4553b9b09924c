//! Error handling for Atelier.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod partial;
pub mod validation_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::AtelierErrorCode;
pub use partial::Partial;
pub use validation_error::ValidationError;
