use serde::Serialize;
use tierly_core::TIER_CATALOG;

#[derive(Debug, Serialize)]
struct TierListing {
    tier: &'static str,
    name: &'static str,
    description: &'static str,
    fallback: bool,
}

pub fn run(json_output: bool) -> String {
    let listings: Vec<TierListing> = TIER_CATALOG
        .iter()
        .enumerate()
        .map(|(index, entry)| TierListing {
            tier: entry.tier.id(),
            name: entry.tier.name(),
            description: entry.description,
            // The last catalog entry is the default-fallback presentation.
            fallback: index == TIER_CATALOG.len() - 1,
        })
        .collect();

    if json_output {
        return serde_json::to_string_pretty(&listings)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
    }

    let mut lines = vec!["tier catalog (rule-ladder priority order):".to_string()];
    for listing in &listings {
        let marker = if listing.fallback { " [default fallback]" } else { "" };
        lines.push(format!("  {}{}", listing.name, marker));
        lines.push(format!("    {}", listing.description));
    }

    lines.join("\n")
}
