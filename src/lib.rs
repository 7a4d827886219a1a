//! Pricing-plan extraction from marketing pages
//!
//! Extracts structured pricing-plan records (name, price, pricing model,
//! billing cycle, features) from arbitrary pricing pages using
//! layout-agnostic heuristics over parsed HTML:
//! - container discovery via class/id fragments and price-bearing text
//! - tiered price matching across currencies and locales
//! - keyword-cascade classification of pricing model and billing cycle
//! - JSON-LD offer fallback when the visible markup yields nothing
//!
//! The engine is pure and synchronous; fetching pages and aggregating
//! results across pages belong to the caller.

pub mod classifiers;
pub mod config;
pub mod container;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod extractors;
pub mod records;

pub use config::{ExtractorConfig, KeywordTables, PlanNameEntry};
pub use engine::PricingExtractor;
pub use error::ExtractionError;
pub use records::{BillingCycle, ExtractionReport, PlanRecord, PricingModel};
