//! Static tier catalog: the commercial copy shown with each recommendation.

use crate::domain::tier::Tier;

/// One catalog entry: a tier together with the description used when it is
/// recommended. `Tier::Pro` appears twice because the default fallback
/// recommends it with different copy than the small-team branch.
#[derive(Debug, Clone, Copy)]
pub struct TierCatalogEntry {
    pub tier: Tier,
    pub description: &'static str,
}

/// The six catalog entries, in rule-ladder priority order.
pub const TIER_CATALOG: &[TierCatalogEntry] = &[
    TierCatalogEntry { tier: Tier::Embedded, description: DESC_EMBEDDED },
    TierCatalogEntry { tier: Tier::FabricCapacity, description: DESC_FABRIC_CAPACITY },
    TierCatalogEntry { tier: Tier::PremiumPerUser, description: DESC_PREMIUM_PER_USER },
    TierCatalogEntry { tier: Tier::Pro, description: DESC_PRO },
    TierCatalogEntry { tier: Tier::Free, description: DESC_FREE },
    TierCatalogEntry { tier: Tier::Pro, description: DESC_PRO_DEFAULT },
];

pub const DESC_EMBEDDED: &str =
    "Solution for embedding Power BI analytics inside your own applications.";
pub const DESC_FABRIC_CAPACITY: &str =
    "Complete data analytics solution with dedicated capacity for enterprises.";
pub const DESC_PREMIUM_PER_USER: &str =
    "Premium license with advanced features assigned per user.";
pub const DESC_PRO: &str = "Standard license for sharing and collaboration in Power BI.";
pub const DESC_FREE: &str = "Free license with basic features for personal use.";
pub const DESC_PRO_DEFAULT: &str =
    "Standard license recommended by default for most usage scenarios.";

// Reason copy, grouped by branch.

pub const REASON_EMBEDDED_SELECTED: &str = "You selected white-label / embedded reporting";
pub const REASON_EMBEDDED_PURPOSE: &str =
    "This license is purpose-built for integrating analytics into your own applications";

pub const REASON_FABRIC_MANY_USERS: &str = "You have more than 50 users";
pub const REASON_FABRIC_INTENSIVE: &str = "You have intensive usage";
pub const REASON_FABRIC_PERFORMANCE: &str =
    "This license delivers optimal performance for large user groups";
pub const REASON_FABRIC_PREMIUM_INCLUDED: &str = "Includes every Power BI premium feature";
pub const REASON_FABRIC_ALTERNATIVE: &str =
    "If your exact user count is flexible, or you prefer a per-user model over dedicated capacity.";

pub const REASON_PPU_NEEDS_PREMIUM: &str = "You need premium features";
pub const REASON_PPU_UNDER_FIFTY: &str = "You have 50 users or fewer";
pub const REASON_PPU_COVERAGE: &str =
    "This license provides all premium features on a per-user basis";

pub const REASON_PRO_SEAT_RANGE: &str = "You have between 1 and 10 users";
pub const REASON_PRO_WEB_PUBLISHING: &str = "You need to publish reports on the web";
pub const REASON_PRO_MODERATE_COLLAB: &str = "You have moderate collaboration needs";
pub const REASON_PRO_SHARING: &str =
    "This license covers the core collaboration and sharing features";
pub const REASON_PRO_ALTERNATIVE_GROWTH: &str =
    "If you expect usage to grow or to need premium features in the future.";

pub const REASON_FREE_SINGLE_USER: &str = "You are a single user";
pub const REASON_FREE_LIGHT_USAGE: &str = "Your usage is light";
pub const REASON_FREE_NO_WEB_PUBLISHING: &str = "You do not need to publish reports on the web";

pub const REASON_DEFAULT_BALANCE: &str = "This license offers a good balance of features and cost";
pub const REASON_DEFAULT_FIT: &str = "It suits the majority of professional usage scenarios";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_entries_with_distinct_copy() {
        assert_eq!(TIER_CATALOG.len(), 6);

        let mut descriptions: Vec<&str> =
            TIER_CATALOG.iter().map(|entry| entry.description).collect();
        descriptions.sort_unstable();
        descriptions.dedup();
        assert_eq!(descriptions.len(), 6, "every catalog entry has its own description");
    }

    #[test]
    fn pro_is_the_only_tier_listed_twice() {
        let pro_entries =
            TIER_CATALOG.iter().filter(|entry| entry.tier == Tier::Pro).count();
        assert_eq!(pro_entries, 2);
    }
}
