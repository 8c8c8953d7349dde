//! Advisor input: the three answers collected from the user.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Smallest seat count the advisor accepts.
pub const USER_COUNT_MIN: u32 = 1;
/// Largest seat count the advisor accepts.
pub const USER_COUNT_MAX: u32 = 200;

/// Usage-frequency level reported by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Normal,
    Intensive,
}

impl std::str::FromStr for Intensity {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "intensive" => Ok(Self::Intensive),
            other => Err(DomainError::UnknownIntensity(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::Intensive => "intensive",
        };
        f.write_str(label)
    }
}

/// The six independent feature switches from the questionnaire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub embedded: bool,
    pub cicd: bool,
    pub frequent_refresh: bool,
    pub deployment_pipelines: bool,
    pub web_publishing: bool,
    pub advanced_analytics: bool,
}

impl FeatureSet {
    /// Whether any of the premium-triggering switches is set.
    ///
    /// Embedded and web publishing are deliberately excluded: embedded has its
    /// own top-priority branch and web publishing only influences the Pro
    /// branch.
    pub fn any_premium(&self) -> bool {
        self.cicd || self.deployment_pipelines || self.frequent_refresh || self.advanced_analytics
    }
}

/// One complete questionnaire answer, built per evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorInput {
    pub user_count: u32,
    pub intensity: Intensity,
    pub features: FeatureSet,
}

impl AdvisorInput {
    /// Create an input with no features selected.
    pub fn new(user_count: u32, intensity: Intensity) -> Self {
        Self { user_count, intensity, features: FeatureSet::default() }
    }

    /// Set the feature switches.
    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    /// Boundary check: the engine contract is only defined inside
    /// `USER_COUNT_MIN..=USER_COUNT_MAX`, so callers reject before invoking it.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.user_count < USER_COUNT_MIN || self.user_count > USER_COUNT_MAX {
            return Err(DomainError::UserCountOutOfRange {
                got: self.user_count,
                min: USER_COUNT_MIN,
                max: USER_COUNT_MAX,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_parses_case_insensitively() {
        assert_eq!("LOW".parse::<Intensity>().unwrap(), Intensity::Low);
        assert_eq!(" normal ".parse::<Intensity>().unwrap(), Intensity::Normal);
        assert_eq!("intensive".parse::<Intensity>().unwrap(), Intensity::Intensive);
    }

    #[test]
    fn intensity_rejects_unknown_values() {
        let error = "extreme".parse::<Intensity>().unwrap_err();
        assert_eq!(error, DomainError::UnknownIntensity("extreme".to_owned()));
    }

    #[test]
    fn validate_accepts_domain_boundaries() {
        assert!(AdvisorInput::new(1, Intensity::Low).validate().is_ok());
        assert!(AdvisorInput::new(200, Intensity::Intensive).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_seat_counts() {
        let error = AdvisorInput::new(0, Intensity::Low).validate().unwrap_err();
        assert_eq!(error, DomainError::UserCountOutOfRange { got: 0, min: 1, max: 200 });

        let error = AdvisorInput::new(201, Intensity::Low).validate().unwrap_err();
        assert_eq!(error, DomainError::UserCountOutOfRange { got: 201, min: 1, max: 200 });
    }

    #[test]
    fn any_premium_ignores_embedded_and_web_publishing() {
        let features =
            FeatureSet { embedded: true, web_publishing: true, ..FeatureSet::default() };
        assert!(!features.any_premium());

        let features = FeatureSet { frequent_refresh: true, ..FeatureSet::default() };
        assert!(features.any_premium());
    }
}
