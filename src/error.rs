//! Caller-facing error records
//!
//! The engine itself never fails: absent pricing information is a normal
//! outcome and every extractor returns a default. Fetch-side callers use
//! `ExtractionError` to report unreachable or undecodable pages, so
//! downstream consumers can tell "no pricing found" apart from "page
//! unreachable".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A page that could not be fetched or decoded, attributed to its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error} ({url})")]
pub struct ExtractionError {
    pub url: String,
    pub error: String,
}

impl ExtractionError {
    pub fn new(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_record_shape() {
        let err = ExtractionError::new("https://example.com", "connection timed out");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["error"], "connection timed out");
        assert_eq!(
            err.to_string(),
            "connection timed out (https://example.com)"
        );
    }
}
