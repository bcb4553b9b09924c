//! Configuration system for Atelier.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod atelier_config;
pub mod clustering_config;
pub mod factor_config;
pub mod ranking_config;
pub mod vectorize_config;

pub use atelier_config::{AtelierConfig, ConfigOverrides};
pub use clustering_config::ClusteringConfig;
pub use factor_config::FactorConfig;
pub use ranking_config::RankingConfig;
pub use vectorize_config::VectorizeConfig;
