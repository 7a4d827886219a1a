//! Plan name extraction
//!
//! Headings are the most reliable label, searched h1 through h6. Without a
//! usable heading, container words are tested against the multilingual
//! stem table and the canonical English name is returned. Falls back to
//! the "Unknown Plan" sentinel, never an empty string.

use std::collections::HashSet;

use crate::config::Rules;
use crate::container::Container;
use crate::records::UNKNOWN_PLAN;

/// Extract a non-empty plan name for the container.
pub fn extract_plan_name(container: &Container<'_>, rules: &Rules) -> String {
    if let Some(heading) = container.find_heading(rules.max_heading_chars) {
        return heading;
    }

    let tokens: HashSet<String> = container
        .text()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();

    for entry in &rules.plan_names {
        if entry.stems.iter().any(|stem| tokens.contains(stem)) {
            return entry.canonical.clone();
        }
    }

    UNKNOWN_PLAN.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExtractorConfig, Rules};
    use scraper::{Html, Selector};

    fn rules() -> Rules {
        Rules::compile(&ExtractorConfig::default())
    }

    fn name_of(html: &str) -> String {
        let document = Html::parse_document(html);
        let selector = Selector::parse(".plan").unwrap();
        let container = Container::new(document.select(&selector).next().unwrap());
        extract_plan_name(&container, &rules())
    }

    #[test]
    fn test_heading_wins() {
        assert_eq!(
            name_of(r#"<div class="plan"><h2>Team</h2><p>basic tools</p></div>"#),
            "Team"
        );
    }

    #[test]
    fn test_overlong_heading_falls_through_to_stems() {
        let long = "Everything you ever wanted to know about our premium offer";
        let html = format!(r#"<div class="plan"><h2>{long}</h2></div>"#);
        // Heading is 58 chars, rejected; "premium" stem picks up the slack.
        assert_eq!(name_of(&html), "Premium");
    }

    #[test]
    fn test_multilingual_stems_canonicalized() {
        assert_eq!(
            name_of(r#"<div class="plan"><p>Notre offre entreprise</p></div>"#),
            "Enterprise"
        );
        assert_eq!(
            name_of(r#"<div class="plan"><p>Plano profissional completo</p></div>"#),
            "Pro"
        );
        assert_eq!(
            name_of(r#"<div class="plan"><p>Tarifa básico</p></div>"#),
            "Basic"
        );
    }

    #[test]
    fn test_stem_requires_whole_word() {
        // "probable" must not match the "pro" stem
        assert_eq!(
            name_of(r#"<div class="plan"><p>probable savings ahead</p></div>"#),
            UNKNOWN_PLAN
        );
    }

    #[test]
    fn test_sentinel_when_nothing_matches() {
        assert_eq!(
            name_of(r#"<div class="plan"><p>$9</p></div>"#),
            UNKNOWN_PLAN
        );
    }
}
