//! Output record types for pricing-plan extraction
//!
//! A `PlanRecord` describes one pricing plan found on a page. Records are
//! plain serializable values; the engine never holds them across calls.

use serde::{Deserialize, Serialize};

/// Plan name used when no heading or known plan stem is found.
pub const UNKNOWN_PLAN: &str = "Unknown Plan";

/// Categorical price for plans advertised as free.
pub const FREE_PRICE: &str = "Free";

/// Categorical price for plans sold through sales contact.
pub const CONTACT_SALES_PRICE: &str = "Contact Sales";

/// How a plan is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PricingModel {
    #[default]
    Tiered,
    Custom,
    #[serde(rename = "Per-User")]
    PerUser,
    #[serde(rename = "Usage-Based")]
    UsageBased,
    Freemium,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::Tiered => "Tiered",
            PricingModel::Custom => "Custom",
            PricingModel::PerUser => "Per-User",
            PricingModel::UsageBased => "Usage-Based",
            PricingModel::Freemium => "Freemium",
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a plan bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BillingCycle {
    #[serde(rename = "annually")]
    Annually,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "per user")]
    PerUser,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Annually => "annually",
            BillingCycle::Monthly => "monthly",
            BillingCycle::PerUser => "per user",
            BillingCycle::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted pricing plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Never empty; falls back to [`UNKNOWN_PLAN`].
    pub plan_name: String,
    /// Matched monetary token, a categorical label, or empty if undetermined.
    pub price: String,
    pub pricing_model: PricingModel,
    pub billing_cycle: BillingCycle,
    /// Insertion order preserved, no duplicates within a record.
    pub features: Vec<String>,
}

impl PlanRecord {
    /// Lowercase `(plan_name, price)` pair used for deduplication.
    pub fn signature(&self) -> (String, String) {
        (self.plan_name.to_lowercase(), self.price.to_lowercase())
    }
}

/// Extraction output for one page: the attributed source URL plus the
/// ordered plan list. An empty plan list is a valid, non-error outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub url: String,
    pub plans: Vec<PlanRecord>,
}
