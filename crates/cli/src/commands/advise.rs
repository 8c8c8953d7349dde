use clap::Args;
use tierly_core::config::{AppConfig, LoadOptions};
use tierly_core::{recommend, AdvisorInput, FeatureSet, Intensity, Recommendation};

use super::CommandResult;

#[derive(Debug, Args)]
pub struct AdviseArgs {
    #[arg(long, help = "Number of users (1-200); defaults to the configured value")]
    pub users: Option<u32>,
    #[arg(long, help = "Usage intensity: low, normal, or intensive")]
    pub intensity: Option<String>,
    #[arg(long, help = "White-label / embedded reporting is required")]
    pub embedded: bool,
    #[arg(long, help = "CI/CD for report deployment is required")]
    pub cicd: bool,
    #[arg(long, help = "Data refreshes several times a day are required")]
    pub frequent_refresh: bool,
    #[arg(long, help = "Deployment pipelines for report lifecycle are required")]
    pub deployment_pipelines: bool,
    #[arg(long, help = "Publishing reports on the web is required")]
    pub web_publishing: bool,
    #[arg(long, help = "Advanced analytics (AI/ML) is required")]
    pub advanced_analytics: bool,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: &AdviseArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("advise", "config_validation", error.to_string(), 2)
        }
    };

    let intensity = match &args.intensity {
        Some(raw) => match raw.parse::<Intensity>() {
            Ok(intensity) => intensity,
            Err(error) => {
                return CommandResult::failure("advise", "invalid_input", error.to_string(), 2)
            }
        },
        None => config.advisor.intensity,
    };

    let input = AdvisorInput::new(args.users.unwrap_or(config.advisor.user_count), intensity)
        .with_features(FeatureSet {
            embedded: args.embedded,
            cicd: args.cicd,
            frequent_refresh: args.frequent_refresh,
            deployment_pipelines: args.deployment_pipelines,
            web_publishing: args.web_publishing,
            advanced_analytics: args.advanced_analytics,
        });

    if let Err(error) = input.validate() {
        return CommandResult::failure("advise", "invalid_input", error.to_string(), 2);
    }

    let recommendation = recommend(&input);

    tracing::info!(
        event_name = "advisor.recommendation_generated",
        tier = recommendation.tier.id(),
        user_count = input.user_count,
        intensity = %input.intensity,
        "recommendation generated"
    );

    if args.json {
        let output = serde_json::to_string_pretty(&recommendation)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
        return CommandResult::output(output);
    }

    CommandResult::output(render_human(&recommendation))
}

fn render_human(recommendation: &Recommendation) -> String {
    let mut lines = vec![
        format!("Recommendation: {}", recommendation.name),
        format!("  {}", recommendation.description),
        String::new(),
        "Why this recommendation:".to_string(),
    ];

    for reason in &recommendation.reasons {
        lines.push(format!("  - {reason}"));
    }

    if let Some(alternative) = &recommendation.alternative {
        lines.push(String::new());
        lines.push("Alternative to consider:".to_string());
        lines.push(format!("  {}", alternative.name));
        lines.push(format!("  {}", alternative.reason));
    }

    lines.push(String::new());
    lines.push(
        "This recommendation is based on the criteria provided. For a detailed analysis \
         and pricing estimates, contact our team."
            .to_string(),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use tierly_core::{Alternative, Recommendation, Tier};

    use super::render_human;

    #[test]
    fn human_output_lists_reasons_and_alternative() {
        let recommendation = Recommendation::new(
            Tier::FabricCapacity,
            "Complete data analytics solution with dedicated capacity for enterprises.",
            vec!["You have more than 50 users".to_owned()],
        )
        .with_alternative(Alternative::new(Tier::PremiumPerUser, "Flexible seat counts."));

        let rendered = render_human(&recommendation);

        assert!(rendered.starts_with("Recommendation: Microsoft Fabric (capacity)"));
        assert!(rendered.contains("  - You have more than 50 users"));
        assert!(rendered.contains("Alternative to consider:"));
        assert!(rendered.contains("Power BI Premium Per User"));
    }

    #[test]
    fn human_output_omits_alternative_block_when_absent() {
        let recommendation = Recommendation::new(
            Tier::Free,
            "Free license with basic features for personal use.",
            vec!["You are a single user".to_owned()],
        );

        let rendered = render_human(&recommendation);
        assert!(!rendered.contains("Alternative to consider:"));
    }
}
