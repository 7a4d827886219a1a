//! Price extraction from container text
//!
//! Tiered matching over the configured price patterns: currency symbol,
//! ISO-like currency code, written currency word, then number-per-unit.
//! The first pattern that matches anywhere in the text wins and its raw
//! substring is returned trimmed; no currency normalization is attempted.
//! Texts without a monetary token fall through to the categorical labels
//! "Free" and "Contact Sales", then to an empty string.

use crate::config::Rules;
use crate::records::{CONTACT_SALES_PRICE, FREE_PRICE};

/// Extract a price string from normalized container text. Never fails;
/// returns an empty string when nothing price-like is present.
pub fn extract_price(text: &str, rules: &Rules) -> String {
    for pattern in &rules.price_patterns {
        if let Some(found) = pattern.find(text) {
            return found.as_str().trim().to_string();
        }
    }

    if rules.free_re.is_match(text) {
        return FREE_PRICE.to_string();
    }

    if rules.contact_re.is_match(text) {
        return CONTACT_SALES_PRICE.to_string();
    }

    String::new()
}
