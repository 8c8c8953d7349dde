use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The closed set of licensing tiers the advisor can recommend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Free,
    Pro,
    PremiumPerUser,
    FabricCapacity,
    Embedded,
}

impl Tier {
    /// Commercial name shown to the user.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Free => "Power BI Free",
            Self::Pro => "Power BI Pro",
            Self::PremiumPerUser => "Power BI Premium Per User",
            Self::FabricCapacity => "Microsoft Fabric (capacity)",
            Self::Embedded => "Power BI Embedded",
        }
    }

    /// Stable machine identifier used in JSON output and config values.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::PremiumPerUser => "premium_per_user",
            Self::FabricCapacity => "fabric_capacity",
            Self::Embedded => "embedded",
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "premium_per_user" => Ok(Self::PremiumPerUser),
            "fabric_capacity" => Ok(Self::FabricCapacity),
            "embedded" => Ok(Self::Embedded),
            other => Err(DomainError::UnknownTier(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_from_str() {
        for tier in [
            Tier::Free,
            Tier::Pro,
            Tier::PremiumPerUser,
            Tier::FabricCapacity,
            Tier::Embedded,
        ] {
            assert_eq!(tier.id().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let error = "platinum".parse::<Tier>().unwrap_err();
        assert_eq!(error, DomainError::UnknownTier("platinum".to_owned()));
    }
}
