pub mod advisor;
pub mod config;
pub mod domain;
pub mod errors;

pub use advisor::{recommend, TierCatalogEntry, TIER_CATALOG};
pub use domain::input::{AdvisorInput, FeatureSet, Intensity, USER_COUNT_MAX, USER_COUNT_MIN};
pub use domain::recommendation::{Alternative, Recommendation};
pub use domain::tier::Tier;
pub use errors::DomainError;
