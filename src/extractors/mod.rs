//! Field extractors
//!
//! Each module pulls one field out of a candidate container. Extractors
//! never fail: missing pricing information is an expected case, so every
//! function returns a default (empty string, sentinel name, empty list)
//! rather than an error.

mod feature_extractor;
mod plan_name_extractor;
mod price_extractor;
mod structured_data_extractor;

pub use feature_extractor::*;
pub use plan_name_extractor::*;
pub use price_extractor::*;
pub use structured_data_extractor::*;
