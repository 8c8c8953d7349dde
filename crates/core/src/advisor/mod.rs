//! Licensing-tier recommendation engine.
//!
//! A single pure function maps one questionnaire input to one recommended
//! tier plus an optional alternative. No state, no I/O, no failure modes
//! inside the declared input domain.

mod catalog;
mod engine;

pub use catalog::{TierCatalogEntry, TIER_CATALOG};
pub use engine::recommend;

/// Seat count above which a dedicated-capacity tier is recommended outright.
pub const CAPACITY_USER_THRESHOLD: u32 = 50;

/// Seat-count band in which the capacity recommendation also suggests the
/// per-user premium tier as an alternative.
pub const CAPACITY_ALTERNATIVE_BAND: std::ops::RangeInclusive<u32> = 40..=60;

/// Upper bound of the small-team seat range handled by the Pro branch.
pub const PRO_TEAM_MAX_USERS: u32 = 10;

/// Seat count above which a normal-intensity Pro recommendation suggests
/// planning for premium needs.
pub const PRO_GROWTH_ALTERNATIVE_MIN_USERS: u32 = 5;
