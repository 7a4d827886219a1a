//! Candidate pricing-card containers
//!
//! A `Container` wraps one DOM node hypothesized to enclose a complete
//! pricing plan, together with its whitespace-normalized text. Containers
//! are built during discovery and discarded once a record is produced or
//! rejected; they never appear in output.

use once_cell::sync::Lazy;
use regex::Regex;
use ego_tree::NodeId;
use scraper::{ElementRef, Selector};

// Selector strings are compile-time constants, so parsing cannot fail.
static HEADING_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["h1", "h2", "h3", "h4", "h5", "h6"]
        .iter()
        .map(|tag| Selector::parse(tag).expect("valid heading selector"))
        .collect()
});

static LIST_ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li").expect("valid list-item selector"));

static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div, p").expect("valid block selector"));

/// One candidate container and its extracted plain text.
pub struct Container<'a> {
    element: ElementRef<'a>,
    text: String,
}

impl<'a> Container<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        let text = normalize_text(&element);
        Self { element, text }
    }

    /// Node identity within the parsed document; used to deduplicate
    /// candidates found by multiple discovery passes.
    pub fn node_id(&self) -> NodeId {
        self.element.id()
    }

    /// Whitespace-normalized text of the whole container.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First usable heading, searched level by level (any h1 before any
    /// h2, and so on). Headings that are empty or at least `max_chars`
    /// long are passed over.
    pub fn find_heading(&self, max_chars: usize) -> Option<String> {
        for selector in HEADING_SELECTORS.iter() {
            if let Some(heading) = self.element.select(selector).next() {
                let text = normalize_text(&heading);
                if !text.is_empty() && text.chars().count() < max_chars {
                    return Some(text);
                }
            }
        }
        None
    }

    /// Text of every `<li>` descendant, in document order.
    pub fn find_list_items(&self) -> Vec<String> {
        self.element
            .select(&LIST_ITEM_SELECTOR)
            .map(|li| normalize_text(&li))
            .collect()
    }

    /// Text of `div`/`p` descendants whose class attribute matches the
    /// given pattern.
    pub fn find_by_class_pattern(&self, pattern: &Regex) -> Vec<String> {
        self.element
            .select(&BLOCK_SELECTOR)
            .filter(|el| {
                el.value()
                    .attr("class")
                    .is_some_and(|class| pattern.is_match(class))
            })
            .map(|el| normalize_text(&el))
            .collect()
    }
}

/// Join text nodes with spaces and collapse runs of whitespace, so that
/// adjacent elements ("<h2>Pro</h2><p>$29</p>") do not fuse into one token.
fn normalize_text(element: &ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
