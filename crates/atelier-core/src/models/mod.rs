//! Plain-data models exchanged with the hosting application.
//! Every type is serializable and safe to encode directly as JSON.

pub mod cluster;
pub mod correlation;
pub mod distribution;
pub mod factor;
pub mod item;
pub mod ranking;
pub mod report;
pub mod scenario;
pub mod snapshot;

pub use cluster::ClusterAssignment;
pub use correlation::CorrelationMatrix;
pub use distribution::{Distribution, ParticipantSort};
pub use factor::FactorResult;
pub use item::{Item, ItemId, ItemRegistry};
pub use ranking::{parse_order, OrderEntry, WeightResult, WeightedItem};
pub use report::{AnalysisReport, ParticipantIssues};
pub use scenario::{RankedItem, Scenario};
pub use snapshot::ProjectSnapshot;
