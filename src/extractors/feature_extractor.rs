//! Feature list extraction
//!
//! List items are the primary source. Sparse cards that keep their bullet
//! points in styled blocks get a second pass over `div`/`p` elements whose
//! class mentions feature/benefit/include. Entries are trimmed,
//! length-bounded and deduplicated, with insertion order preserved.

use crate::config::Rules;
use crate::container::Container;

/// Collect feature strings for the container.
pub fn extract_features(container: &Container<'_>, rules: &Rules) -> Vec<String> {
    let mut features: Vec<String> = Vec::new();

    for item in container.find_list_items().into_iter().take(rules.feature_cap) {
        push_feature(&mut features, item, rules);
    }

    if features.len() < 3 {
        for item in container
            .find_by_class_pattern(&rules.feature_class_re)
            .into_iter()
            .take(rules.class_feature_cap)
        {
            push_feature(&mut features, item, rules);
        }
    }

    features
}

fn push_feature(features: &mut Vec<String>, text: String, rules: &Rules) {
    let len = text.chars().count();
    if len < rules.min_feature_chars || len >= rules.max_feature_chars {
        return;
    }
    if features.contains(&text) {
        return;
    }
    features.push(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExtractorConfig, Rules};
    use scraper::{Html, Selector};

    fn features_of(html: &str) -> Vec<String> {
        let rules = Rules::compile(&ExtractorConfig::default());
        let document = Html::parse_document(html);
        let selector = Selector::parse(".plan").unwrap();
        let container = Container::new(document.select(&selector).next().unwrap());
        extract_features(&container, &rules)
    }

    #[test]
    fn test_list_items_in_document_order() {
        let html = r#"<div class="plan"><ul>
            <li>5 users</li>
            <li>10 GB storage</li>
            <li>Email support</li>
        </ul></div>"#;
        assert_eq!(
            features_of(html),
            vec!["5 users", "10 GB storage", "Email support"]
        );
    }

    #[test]
    fn test_length_bounds() {
        let long = "x".repeat(160);
        let html = format!(
            r#"<div class="plan"><ul>
                <li>ok</li>
                <li>{long}</li>
                <li>5 users</li>
            </ul></div>"#
        );
        // "ok" is under 4 chars, the long one is over 150
        assert_eq!(features_of(&html), vec!["5 users"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let html = r#"<div class="plan"><ul>
            <li>5 users</li>
            <li>5 users</li>
        </ul></div>"#;
        assert_eq!(features_of(html), vec!["5 users"]);
    }

    #[test]
    fn test_list_item_cap() {
        let items: String = (0..12).map(|i| format!("<li>Feature number {i}</li>")).collect();
        let html = format!(r#"<div class="plan"><ul>{items}</ul></div>"#);
        assert_eq!(features_of(&html).len(), 8);
    }

    #[test]
    fn test_class_scan_supplements_sparse_lists() {
        let html = r#"<div class="plan">
            <ul><li>5 users</li></ul>
            <p class="feature-row">Priority support</p>
            <p class="footnote">Taxes may apply</p>
            <div class="includes">Custom domains</div>
        </div>"#;
        assert_eq!(
            features_of(html),
            vec!["5 users", "Priority support", "Custom domains"]
        );
    }

    #[test]
    fn test_class_scan_skipped_when_list_is_rich() {
        let html = r#"<div class="plan">
            <ul><li>5 users</li><li>10 GB storage</li><li>Email support</li></ul>
            <p class="feature-row">Priority support</p>
        </div>"#;
        assert_eq!(
            features_of(html),
            vec!["5 users", "10 GB storage", "Email support"]
        );
    }

    #[test]
    fn test_no_features_is_empty() {
        assert_eq!(
            features_of(r#"<div class="plan"><p>Contact our sales team</p></div>"#),
            Vec::<String>::new()
        );
    }
}
