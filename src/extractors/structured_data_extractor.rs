//! Structured-data fallback
//!
//! When the main pipeline finds nothing, JSON-LD blocks are the last
//! resort: product/offer schemas often survive on pages whose visible
//! markup defeats the heuristics. Supports top-level arrays and `@graph`
//! wrappers. Malformed or absent structured data yields an empty result,
//! not an error.

use scraper::{Html, Selector};
use serde_json::{Map, Value};

use crate::records::{BillingCycle, PlanRecord, PricingModel, UNKNOWN_PLAN};

/// Build plan records from embedded JSON-LD offer entries.
pub fn extract_structured_plans(document: &Html) -> Vec<PlanRecord> {
    let selector = match Selector::parse(r#"script[type="application/ld+json"]"#) {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let mut plans = Vec::new();

    for element in document.select(&selector) {
        let content = element.inner_html();
        let trimmed = content.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Ok(json) = serde_json::from_str::<Value>(trimmed) {
            collect_offer_plans(&json, &mut plans);
        }
    }

    plans
}

fn collect_offer_plans(value: &Value, plans: &mut Vec<PlanRecord>) {
    match value {
        Value::Array(arr) => {
            for item in arr {
                collect_offer_plans(item, plans);
            }
        }
        Value::Object(obj) => {
            if let Some(Value::Array(graph)) = obj.get("@graph") {
                for item in graph {
                    collect_offer_plans(item, plans);
                }
            }
            if let Some(offers) = obj.get("offers") {
                match offers {
                    Value::Array(arr) => {
                        for offer in arr {
                            push_offer_plan(offer, plans);
                        }
                    }
                    single => push_offer_plan(single, plans),
                }
            }
        }
        _ => {}
    }
}

fn push_offer_plan(offer: &Value, plans: &mut Vec<PlanRecord>) {
    let Value::Object(obj) = offer else {
        return;
    };

    let plan_name = field_string(obj, "name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_PLAN.to_string());

    let amount = field_string(obj, "price").unwrap_or_default();
    let currency = field_string(obj, "priceCurrency").unwrap_or_default();
    let price = format!("{amount} {currency}").trim().to_string();

    plans.push(PlanRecord {
        plan_name,
        price,
        pricing_model: PricingModel::Tiered,
        billing_cycle: BillingCycle::NotApplicable,
        features: vec![],
    });
}

/// Offer fields may be JSON strings or numbers; both become trimmed strings.
fn field_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
