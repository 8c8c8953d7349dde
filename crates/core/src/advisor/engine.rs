//! The recommendation rule ladder.

use super::catalog::*;
use super::{
    CAPACITY_ALTERNATIVE_BAND, CAPACITY_USER_THRESHOLD, PRO_GROWTH_ALTERNATIVE_MIN_USERS,
    PRO_TEAM_MAX_USERS,
};
use crate::domain::input::{AdvisorInput, Intensity};
use crate::domain::recommendation::{Alternative, Recommendation};
use crate::domain::tier::Tier;

/// Map one questionnaire input to one tier recommendation.
///
/// The branches form an ordered short-circuit ladder: the first matching
/// guard wins and evaluation stops. The ordering is part of the contract —
/// guard regions overlap (a 45-user intensive CI/CD shop satisfies both the
/// capacity and the per-user guards) and only the ladder order makes the
/// outcome unambiguous. The trailing default branch makes the function total
/// over the declared domain, so it cannot fail.
pub fn recommend(input: &AdvisorInput) -> Recommendation {
    let features = &input.features;

    // 1. Embedded wins over everything else.
    if features.embedded {
        return Recommendation::new(
            Tier::Embedded,
            DESC_EMBEDDED,
            vec![REASON_EMBEDDED_SELECTED.to_owned(), REASON_EMBEDDED_PURPOSE.to_owned()],
        );
    }

    // 2. Dedicated capacity: large seat counts, or intensive usage combined
    // with at least one premium-triggering feature.
    let over_capacity_threshold = input.user_count > CAPACITY_USER_THRESHOLD;
    if over_capacity_threshold
        || (input.intensity == Intensity::Intensive && features.any_premium())
    {
        // Seat-count wording takes precedence over the intensive-usage wording.
        let trigger = if over_capacity_threshold {
            REASON_FABRIC_MANY_USERS
        } else {
            REASON_FABRIC_INTENSIVE
        };

        let mut recommendation = Recommendation::new(
            Tier::FabricCapacity,
            DESC_FABRIC_CAPACITY,
            vec![
                trigger.to_owned(),
                REASON_FABRIC_PERFORMANCE.to_owned(),
                REASON_FABRIC_PREMIUM_INCLUDED.to_owned(),
            ],
        );

        if CAPACITY_ALTERNATIVE_BAND.contains(&input.user_count) {
            recommendation = recommendation.with_alternative(Alternative::new(
                Tier::PremiumPerUser,
                REASON_FABRIC_ALTERNATIVE,
            ));
        }

        return recommendation;
    }

    // 3. Per-user premium for smaller teams that still need premium features.
    if input.user_count <= CAPACITY_USER_THRESHOLD && features.any_premium() {
        return Recommendation::new(
            Tier::PremiumPerUser,
            DESC_PREMIUM_PER_USER,
            vec![
                REASON_PPU_NEEDS_PREMIUM.to_owned(),
                REASON_PPU_UNDER_FIFTY.to_owned(),
                REASON_PPU_COVERAGE.to_owned(),
            ],
        );
    }

    // 4. Pro for small collaborating teams or anyone publishing to the web.
    if (input.user_count > 1 && input.user_count <= PRO_TEAM_MAX_USERS)
        || features.web_publishing
    {
        let feature_reason = if features.web_publishing {
            REASON_PRO_WEB_PUBLISHING
        } else {
            REASON_PRO_MODERATE_COLLAB
        };

        let mut recommendation = Recommendation::new(
            Tier::Pro,
            DESC_PRO,
            vec![
                REASON_PRO_SEAT_RANGE.to_owned(),
                feature_reason.to_owned(),
                REASON_PRO_SHARING.to_owned(),
            ],
        );

        if input.intensity == Intensity::Normal
            && input.user_count > PRO_GROWTH_ALTERNATIVE_MIN_USERS
        {
            recommendation = recommendation.with_alternative(Alternative::new(
                Tier::PremiumPerUser,
                REASON_PRO_ALTERNATIVE_GROWTH,
            ));
        }

        return recommendation;
    }

    // 5. Free only fits a single light user with no web publishing.
    if input.user_count == 1 && input.intensity == Intensity::Low && !features.web_publishing {
        return Recommendation::new(
            Tier::Free,
            DESC_FREE,
            vec![
                REASON_FREE_SINGLE_USER.to_owned(),
                REASON_FREE_LIGHT_USAGE.to_owned(),
                REASON_FREE_NO_WEB_PUBLISHING.to_owned(),
            ],
        );
    }

    // 6. Everything else lands on Pro as the safe default.
    Recommendation::new(
        Tier::Pro,
        DESC_PRO_DEFAULT,
        vec![REASON_DEFAULT_BALANCE.to_owned(), REASON_DEFAULT_FIT.to_owned()],
    )
}
