//! atelier-core: foundation crate for the Atelier workshop analysis engine.
//!
//! Defines the models exchanged with the hosting application, the error
//! enums, layered configuration, tracing setup and shared constants.
//! `atelier-analysis` depends on this crate for everything it consumes
//! and returns.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

pub use config::AtelierConfig;
pub use errors::{AnalysisError, AtelierErrorCode, ConfigError, Partial, ValidationError};
pub use models::{
    parse_order, AnalysisReport, ClusterAssignment, CorrelationMatrix, Distribution,
    FactorResult, Item, ItemId, ItemRegistry, OrderEntry, ParticipantIssues, ParticipantSort,
    ProjectSnapshot, RankedItem, Scenario, WeightResult, WeightedItem,
};
