use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// A secondary tier worth considering alongside the primary recommendation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub tier: Tier,
    pub name: String,
    pub reason: String,
}

impl Alternative {
    pub fn new(tier: Tier, reason: impl Into<String>) -> Self {
        Self { tier, name: tier.name().to_owned(), reason: reason.into() }
    }
}

/// The advisor's answer for one questionnaire input.
///
/// A transient value object: created fresh per evaluation, never cached or
/// mutated. `reasons` mirrors the order the decision rules fired in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tier: Tier,
    pub name: String,
    pub description: String,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<Alternative>,
}

impl Recommendation {
    pub fn new(tier: Tier, description: impl Into<String>, reasons: Vec<String>) -> Self {
        Self {
            tier,
            name: tier.name().to_owned(),
            description: description.into(),
            reasons,
            alternative: None,
        }
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = Some(alternative);
        self
    }
}
