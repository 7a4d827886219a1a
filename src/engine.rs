//! Extraction pipeline
//!
//! `PricingExtractor` ties the stages together: container discovery,
//! per-container field extraction and classification, assembly into
//! records, deduplication, the structured-data fallback when the pipeline
//! comes up empty, and the result cap. The engine is pure and synchronous;
//! it performs no I/O and keeps no state across calls, so callers may run
//! any number of extractions in parallel.

use std::collections::HashSet;

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::classifiers::{classify_billing_cycle, classify_pricing_model};
use crate::config::{ExtractorConfig, Rules};
use crate::container::Container;
use crate::discovery::discover_containers;
use crate::extractors::{
    extract_features, extract_plan_name, extract_price, extract_structured_plans,
};
use crate::records::{ExtractionReport, PlanRecord, UNKNOWN_PLAN};

/// Pricing-plan extraction engine. Construction compiles the configured
/// selector and pattern tables once; the engine itself is immutable.
pub struct PricingExtractor {
    rules: Rules,
}

impl PricingExtractor {
    /// Engine with the built-in selector, pattern and locale tables.
    pub fn new() -> Self {
        Self::with_config(&ExtractorConfig::default())
    }

    /// Engine with caller-supplied tables, e.g. extended locales.
    pub fn with_config(config: &ExtractorConfig) -> Self {
        Self {
            rules: Rules::compile(config),
        }
    }

    /// Parse `html` and extract plans, attributing them to `url`.
    pub fn extract(&self, html: &str, url: &str) -> ExtractionReport {
        let document = Html::parse_document(html);
        ExtractionReport {
            url: normalize_url(url),
            plans: self.extract_plans(&document),
        }
    }

    /// Extract plans from an already parsed document.
    pub fn extract_plans(&self, document: &Html) -> Vec<PlanRecord> {
        let containers = discover_containers(document, &self.rules);

        let mut plans: Vec<PlanRecord> = containers
            .iter()
            .filter_map(|container| self.extract_plan(container))
            .collect();

        if plans.is_empty() {
            debug!("no plans from containers, trying structured data");
            plans = extract_structured_plans(document);
        }

        dedupe_plans(plans, self.rules.result_cap)
    }

    /// Build one record from a container, or reject it when neither a
    /// price nor a recognizable name was found.
    fn extract_plan(&self, container: &Container<'_>) -> Option<PlanRecord> {
        let text = container.text();
        let price = extract_price(text, &self.rules);
        let plan_name = extract_plan_name(container, &self.rules);

        if price.is_empty() && plan_name == UNKNOWN_PLAN {
            return None;
        }

        let lower = text.to_lowercase();
        Some(PlanRecord {
            pricing_model: classify_pricing_model(&lower, &price, &self.rules),
            billing_cycle: classify_billing_cycle(&lower, &self.rules),
            features: extract_features(container, &self.rules),
            plan_name,
            price,
        })
    }
}

impl Default for PricingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop records whose lowercase `(plan_name, price)` pair was already
/// seen, keeping first-seen order, then truncate to the result cap.
pub fn dedupe_plans(plans: Vec<PlanRecord>, cap: usize) -> Vec<PlanRecord> {
    let mut seen = HashSet::new();
    let mut unique: Vec<PlanRecord> = plans
        .into_iter()
        .filter(|plan| seen.insert(plan.signature()))
        .collect();
    unique.truncate(cap);
    unique
}

/// Give scheme-less URLs an https scheme, as fetch layers do before
/// requesting them; anything unparseable is recorded as given.
fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    match Url::parse(&candidate) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{BillingCycle, PricingModel};

    #[test]
    fn test_end_to_end_monthly_card() {
        let html = r#"
        <div class="plan-card">
            <h2>Pro</h2>
            <p>$29/month</p>
            <ul><li>5 users</li></ul>
        </div>
        "#;

        let plans = PricingExtractor::new().extract_plans(&Html::parse_document(html));
        assert!(!plans.is_empty());
        let plan = &plans[0];
        assert_eq!(plan.plan_name, "Pro");
        assert_eq!(plan.price, "$29/month");
        assert_eq!(plan.pricing_model, PricingModel::Tiered);
        assert_eq!(plan.billing_cycle, BillingCycle::Monthly);
        assert_eq!(plan.features, vec!["5 users"]);
    }

    #[test]
    fn test_end_to_end_contact_sales_card() {
        let html = r#"
        <div class="pricing-tier">
            <h2>Enterprise</h2>
            <p>Contact our sales team</p>
        </div>
        "#;

        let plans = PricingExtractor::new().extract_plans(&Html::parse_document(html));
        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.plan_name, "Enterprise");
        assert_eq!(plan.price, "Contact Sales");
        assert_eq!(plan.pricing_model, PricingModel::Custom);
        assert_eq!(plan.billing_cycle, BillingCycle::NotApplicable);
        assert!(plan.features.is_empty());
    }

    #[test]
    fn test_end_to_end_structured_data_fallback() {
        let html = r#"
        <p>Rendered client-side.</p>
        <script type="application/ld+json">
        {"@type": "Product", "offers": [{"name": "Starter", "price": "10", "priceCurrency": "USD"}]}
        </script>
        "#;

        let plans = PricingExtractor::new().extract_plans(&Html::parse_document(html));
        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.plan_name, "Starter");
        assert_eq!(plan.price, "10 USD");
        assert_eq!(plan.pricing_model, PricingModel::Tiered);
        assert_eq!(plan.billing_cycle, BillingCycle::NotApplicable);
        assert!(plan.features.is_empty());
    }

    #[test]
    fn test_fallback_not_used_when_containers_yield_plans() {
        let html = r#"
        <div class="plan-card"><h2>Pro</h2><p>$29/month</p></div>
        <script type="application/ld+json">
        {"@type": "Product", "offers": [{"name": "Shadow", "price": "1", "priceCurrency": "USD"}]}
        </script>
        "#;

        let plans = PricingExtractor::new().extract_plans(&Html::parse_document(html));
        assert!(plans.iter().all(|p| p.plan_name != "Shadow"));
    }

    #[test]
    fn test_identical_cards_deduplicate() {
        let html = r#"
        <div class="plan-card"><h2>Pro</h2><p>$29/month</p></div>
        <div class="plan-card"><h2>Pro</h2><p>$29/month</p></div>
        "#;

        let plans = PricingExtractor::new().extract_plans(&Html::parse_document(html));
        let pro_count = plans
            .iter()
            .filter(|p| p.plan_name == "Pro" && p.price == "$29/month")
            .count();
        assert_eq!(pro_count, 1);
    }

    #[test]
    fn test_result_cap() {
        let cards: String = (0..10)
            .map(|i| format!(r#"<div class="plan-card"><h2>Plan {i}</h2><p>${i}9/month</p></div>"#))
            .collect();
        let plans = PricingExtractor::new().extract_plans(&Html::parse_document(&cards));
        assert!(plans.len() <= 6);
    }

    #[test]
    fn test_container_without_price_or_name_is_dropped() {
        // Discovered via the card class, but yields neither field.
        let html = r#"<div class="card"><p>Lorem ipsum dolor sit.</p></div>"#;
        let plans = PricingExtractor::new().extract_plans(&Html::parse_document(html));
        assert!(plans.is_empty());
    }

    #[test]
    fn test_idempotence() {
        let html = r#"
        <div class="plan-card"><h2>Basic</h2><p>$9/month</p><ul><li>1 user</li></ul></div>
        <div class="plan-card"><h2>Pro</h2><p>$29/month</p><ul><li>5 users</li></ul></div>
        "#;
        let document = Html::parse_document(html);
        let extractor = PricingExtractor::new();
        assert_eq!(
            extractor.extract_plans(&document),
            extractor.extract_plans(&document)
        );
    }

    #[test]
    fn test_extract_report_normalizes_url() {
        let report = PricingExtractor::new().extract("<p>nothing here</p>", "example.com/pricing");
        assert_eq!(report.url, "https://example.com/pricing");
        assert!(report.plans.is_empty());
    }

    #[test]
    fn test_dedupe_plans_keeps_first_seen_order() {
        let make = |name: &str, price: &str| PlanRecord {
            plan_name: name.to_string(),
            price: price.to_string(),
            pricing_model: PricingModel::Tiered,
            billing_cycle: BillingCycle::NotApplicable,
            features: vec![],
        };
        let deduped = dedupe_plans(
            vec![
                make("Pro", "$29"),
                make("PRO", "$29"),
                make("Basic", "$9"),
            ],
            6,
        );
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].plan_name, "Pro");
        assert_eq!(deduped[1].plan_name, "Basic");
    }
}
