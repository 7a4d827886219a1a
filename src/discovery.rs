//! Container discovery
//!
//! Locates DOM nodes likely to enclose one pricing card. Two passes feed a
//! shared candidate set: selector patterns over class/id fragments, and a
//! scan of text nodes for price-looking content whose ancestors get pulled
//! in (cards often keep the price in a nested span). Candidates are
//! deduplicated by node identity and returned in document order, capped
//! before field extraction. Discovery never fails: selectors that do not
//! parse or do not match are simply skipped.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Html};
use tracing::debug;

use crate::config::Rules;
use crate::container::Container;

/// Collect candidate containers from the parsed document.
pub fn discover_containers<'a>(document: &'a Html, rules: &Rules) -> Vec<Container<'a>> {
    let mut candidates: HashSet<NodeId> = HashSet::new();

    for selector in &rules.container_selectors {
        for element in document.select(selector) {
            candidates.insert(element.id());
        }
    }

    if let Some(price_scan) = &rules.price_scan {
        for node in document.tree.root().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            if !price_scan.is_match(text) {
                continue;
            }
            for ancestor in node.ancestors().take(rules.ancestor_levels) {
                if ancestor.value().is_element() {
                    candidates.insert(ancestor.id());
                }
            }
        }
    }

    // Re-walk the tree so the cap keeps the first candidates in document
    // order, regardless of which pass found them.
    let mut containers = Vec::new();
    for node in document.tree.root().descendants() {
        if containers.len() >= rules.container_cap {
            break;
        }
        if !candidates.contains(&node.id()) {
            continue;
        }
        if let Some(element) = ElementRef::wrap(node) {
            containers.push(Container::new(element));
        }
    }

    debug!(
        found = candidates.len(),
        kept = containers.len(),
        "container discovery"
    );
    containers
}
