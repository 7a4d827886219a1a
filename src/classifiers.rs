//! Pricing-model and billing-cycle classification
//!
//! Both classifiers are fixed-priority cascades over lowercased container
//! text: rules are tested top-down and the first hit wins, so tie-breaks
//! between co-occurring signals stay explicit. Yearly terms are checked
//! before monthly ones on purpose: pages often quote a monthly price next
//! to an annual-billing discount note, and the annual intent should win.

use crate::config::Rules;
use crate::records::{BillingCycle, PricingModel, CONTACT_SALES_PRICE, FREE_PRICE};

/// Classify how the plan is charged. `text` must already be lowercased;
/// `price` is the already-extracted price string.
pub fn classify_pricing_model(text: &str, price: &str, rules: &Rules) -> PricingModel {
    if rules.contact_re.is_match(text) || price == CONTACT_SALES_PRICE {
        return PricingModel::Custom;
    }
    if has_per_user_phrase(text, &rules.user_terms) {
        return PricingModel::PerUser;
    }
    if rules.usage_re.is_match(text) {
        return PricingModel::UsageBased;
    }
    if rules.free_re.is_match(text) || price == FREE_PRICE {
        return PricingModel::Freemium;
    }
    PricingModel::Tiered
}

/// Classify how often the plan bills. `text` must already be lowercased.
pub fn classify_billing_cycle(text: &str, rules: &Rules) -> BillingCycle {
    if rules.yearly_terms.iter().any(|term| text.contains(term.as_str())) {
        return BillingCycle::Annually;
    }
    if rules.monthly_terms.iter().any(|term| text.contains(term.as_str())) {
        return BillingCycle::Monthly;
    }
    if has_per_user_phrase(text, &rules.user_terms) {
        return BillingCycle::PerUser;
    }
    BillingCycle::NotApplicable
}

/// True when the text prices by seat: `per <term>` or `/<term>` for any
/// configured user term.
fn has_per_user_phrase(text: &str, user_terms: &[String]) -> bool {
    user_terms.iter().any(|term| {
        text.contains(&format!("/{term}")) || text.contains(&format!("per {term}"))
    })
}
