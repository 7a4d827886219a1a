//! Extraction configuration
//!
//! All selector patterns, price patterns and keyword tables live here as
//! immutable data handed to the engine at construction. Locale tables can be
//! swapped or extended without touching extraction logic. `Rules` is the
//! compiled form: selectors and regexes are built once, and malformed
//! entries are skipped rather than failing the whole extraction.

use regex::Regex;
use scraper::Selector;
use tracing::debug;

/// Pattern that can never match; used when a compiled table is empty.
const NEVER_MATCH: &str = r"[^\s\S]";

/// One canonical plan name plus the multilingual stems that map to it.
#[derive(Debug, Clone)]
pub struct PlanNameEntry {
    /// English name returned to callers, e.g. "Pro".
    pub canonical: String,
    /// Lowercase stems tested against word-boundary tokens.
    pub stems: Vec<String>,
}

impl PlanNameEntry {
    pub fn new(canonical: &str, stems: &[&str]) -> Self {
        Self {
            canonical: canonical.to_string(),
            stems: stems.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Multilingual keyword tables driving the classifiers and the categorical
/// price labels. All terms are lowercase.
#[derive(Debug, Clone)]
pub struct KeywordTables {
    /// Free-plan indicators; ASCII terms are matched on word boundaries,
    /// non-ASCII terms by substring.
    pub free: Vec<String>,
    /// Contact-sales indicators; matched by substring.
    pub contact: Vec<String>,
    /// Custom/enterprise indicators; matched by substring.
    pub custom: Vec<String>,
    /// Monthly-cycle stems; matched by substring so `month` covers
    /// `monthly` and `/month`.
    pub monthly: Vec<String>,
    /// Yearly-cycle stems; matched by substring.
    pub yearly: Vec<String>,
    /// User/seat terms tested as `per <term>` or `/<term>` phrases.
    pub user: Vec<String>,
    /// Usage-based indicators; ASCII terms are matched on word boundaries
    /// (short terms like `api` would otherwise match inside unrelated
    /// words), non-ASCII terms by substring.
    pub usage: Vec<String>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            free: to_strings(&[
                "free",
                "gratuit",
                "gratis",
                "gratuito",
                "kostenlos",
                "無料",
                "бесплатно",
                "무료",
                "免费",
            ]),
            contact: to_strings(&[
                "contact",
                "kontakt",
                "contacter",
                "contactar",
                "contattare",
                "request a quote",
                "request quote",
                "devis",
            ]),
            custom: to_strings(&[
                "custom",
                "enterprise",
                "entreprise",
                "empresa",
                "personnalisé",
                "personalizado",
                "personalizzato",
                "maßgeschneidert",
            ]),
            monthly: to_strings(&[
                "month", "mensuel", "mensual", "mensile", "mensal", "monat", "mois",
            ]),
            yearly: to_strings(&[
                "year", "annual", "annuel", "anual", "annuale", "année", "jahr", "jährlich",
            ]),
            user: to_strings(&[
                "user",
                "utilisateur",
                "usuario",
                "utente",
                "usuário",
                "benutzer",
                "seat",
            ]),
            usage: to_strings(&[
                "usage",
                "api",
                "request",
                "requests",
                "transaction",
                "transactions",
                "volume",
                "utilisation",
                "uso",
                "utilizzo",
                "verbrauch",
            ]),
        }
    }
}

/// Immutable extraction configuration. [`Default`] supplies the built-in
/// selector, pattern and locale tables.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// CSS selector patterns for container discovery, in priority order.
    /// Malformed entries are skipped at compile time.
    pub container_selectors: Vec<String>,
    /// Price regex patterns in priority order; the first pattern with a
    /// match wins.
    pub price_patterns: Vec<String>,
    /// Class-attribute pattern for the secondary feature scan.
    pub feature_class_pattern: String,
    pub keywords: KeywordTables,
    /// Plan-name stem table, tested in order.
    pub plan_names: Vec<PlanNameEntry>,
    /// Max containers passed to field extraction.
    pub container_cap: usize,
    /// Max records in the final result.
    pub result_cap: usize,
    /// Ancestor levels walked up from a price-bearing text node.
    pub ancestor_levels: usize,
    /// Max list-item features per container.
    pub feature_cap: usize,
    /// Max class-scanned features appended per container.
    pub class_feature_cap: usize,
    /// Headings at or above this length are rejected as plan names.
    pub max_heading_chars: usize,
    /// Inclusive lower bound on feature length.
    pub min_feature_chars: usize,
    /// Exclusive upper bound on feature length.
    pub max_feature_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            container_selectors: to_strings(&[
                // Pricing-specific class/id fragments
                r#"[class*="pric" i]"#,
                r#"[class*="plan" i]"#,
                r#"[class*="tier" i]"#,
                r#"[class*="package" i]"#,
                r#"[id*="pric" i]"#,
                r#"[id*="plan" i]"#,
                r#"[id*="tier" i]"#,
                // CMS markers (HubSpot, WordPress page builders)
                r#"[class*="hs-" i]"#,
                ".hs-cta-wrapper",
                ".hs-form",
                r#"[class*="wp-" i]"#,
                r#"[class*="elementor" i]"#,
                r#"[class*="divi" i]"#,
                // Generic card/grid layouts
                r#"[class*="card" i]"#,
                r#"[class*="column" i]"#,
                r#"[class*="grid" i]"#,
                r#"[data-testid*="pric" i]"#,
                r#"[data-testid*="plan" i]"#,
            ]),
            price_patterns: to_strings(&[
                // Currency symbol, grouped number, optional per-unit suffix
                r"(?i)[\$€£¥₹₽¢₩₦₪₵₴₸₺₫₱]\s*\d{1,3}(?:[,.\s]\d{3})*(?:[.,]\d{1,2})?(?:\s*/\s*(?:month|mo|year|yr|user|seat|license|subscription))?",
                // Grouped number followed by an ISO-like currency code
                r"(?i)\d{1,3}(?:[,.\s]\d{3})*(?:[.,]\d{1,2})?\s*(?:USD|EUR|GBP|JPY|CAD|AUD|CHF|CNY|INR|BRL|KRW|RUB)\b",
                // Number followed by a written currency word
                r"(?i)\d+[.,]?\d*\s*(?:dollar|euro|pound|yen|franc|peso|rupee|yuan|won|ruble)s?\b",
                // Number per unit
                r"(?i)\d+[.,]?\d*\s*/\s*(?:month|year|user|seat|license|subscription)\b",
            ]),
            feature_class_pattern: "(?i)feature|benefit|include".to_string(),
            keywords: KeywordTables::default(),
            plan_names: vec![
                PlanNameEntry::new("Basic", &["basic", "basique", "básico", "base", "basis", "grund"]),
                PlanNameEntry::new(
                    "Starter",
                    &["starter", "démarrage", "iniciador", "avviamento", "inicial"],
                ),
                PlanNameEntry::new(
                    "Pro",
                    &[
                        "pro",
                        "professionnel",
                        "profesional",
                        "professionale",
                        "profissional",
                        "professionell",
                    ],
                ),
                PlanNameEntry::new("Premium", &["premium", "prémium"]),
                PlanNameEntry::new(
                    "Enterprise",
                    &["enterprise", "entreprise", "empresa", "impresa", "unternehmen"],
                ),
                PlanNameEntry::new(
                    "Business",
                    &["business", "affaires", "negocio", "negócio", "geschäft"],
                ),
                PlanNameEntry::new("Free", &["free", "gratuit", "gratis", "gratuito", "kostenlos"]),
            ],
            container_cap: 8,
            result_cap: 6,
            ancestor_levels: 3,
            feature_cap: 8,
            class_feature_cap: 5,
            max_heading_chars: 50,
            min_feature_chars: 4,
            max_feature_chars: 150,
        }
    }
}

/// Compiled form of [`ExtractorConfig`]: selectors parsed, regexes built.
/// Construction never fails; unusable entries are dropped with a debug log.
pub struct Rules {
    pub(crate) container_selectors: Vec<Selector>,
    pub(crate) price_patterns: Vec<Regex>,
    /// Combined alternation of all valid price patterns, used by the
    /// text-node scan during discovery. `None` when no pattern compiled.
    pub(crate) price_scan: Option<Regex>,
    pub(crate) free_re: Regex,
    pub(crate) contact_re: Regex,
    pub(crate) usage_re: Regex,
    pub(crate) feature_class_re: Regex,
    pub(crate) monthly_terms: Vec<String>,
    pub(crate) yearly_terms: Vec<String>,
    pub(crate) user_terms: Vec<String>,
    pub(crate) plan_names: Vec<PlanNameEntry>,
    pub(crate) container_cap: usize,
    pub(crate) result_cap: usize,
    pub(crate) ancestor_levels: usize,
    pub(crate) feature_cap: usize,
    pub(crate) class_feature_cap: usize,
    pub(crate) max_heading_chars: usize,
    pub(crate) min_feature_chars: usize,
    pub(crate) max_feature_chars: usize,
}

impl Rules {
    pub fn compile(config: &ExtractorConfig) -> Self {
        let container_selectors = config
            .container_selectors
            .iter()
            .filter_map(|pattern| match Selector::parse(pattern) {
                Ok(s) => Some(s),
                Err(_) => {
                    debug!(%pattern, "skipping malformed container selector");
                    None
                }
            })
            .collect();

        let mut valid_patterns = Vec::new();
        let mut price_patterns = Vec::new();
        for pattern in &config.price_patterns {
            match Regex::new(pattern) {
                Ok(re) => {
                    valid_patterns.push(pattern.clone());
                    price_patterns.push(re);
                }
                Err(_) => debug!(%pattern, "skipping malformed price pattern"),
            }
        }
        let price_scan = if valid_patterns.is_empty() {
            None
        } else {
            Regex::new(&valid_patterns.join("|")).ok()
        };

        // Zero prices like "$0" count as free even without a free word.
        // The zero must not be the integer part of a cent price: "$0.99"
        // is a real price, not a free indicator. The regex crate has no
        // lookahead, so "0 not followed by an optional separator plus a
        // digit" is spelled out as an alternation.
        let free_re = compile_or_never(&format!(
            r"{}|[\$€£]\s*0(?:$|[^\w.,]|[.,](?:$|[^\w]))",
            word_bounded_set(&config.keywords.free)
        ));
        let contact_terms: Vec<String> = config
            .keywords
            .contact
            .iter()
            .chain(config.keywords.custom.iter())
            .cloned()
            .collect();
        let contact_re = compile_or_never(&substring_set(&contact_terms));
        let usage_re = compile_or_never(&word_bounded_set(&config.keywords.usage));
        let feature_class_re = compile_or_never(&config.feature_class_pattern);

        Self {
            container_selectors,
            price_patterns,
            price_scan,
            free_re,
            contact_re,
            usage_re,
            feature_class_re,
            monthly_terms: config.keywords.monthly.clone(),
            yearly_terms: config.keywords.yearly.clone(),
            user_terms: config.keywords.user.clone(),
            plan_names: config.plan_names.clone(),
            container_cap: config.container_cap,
            result_cap: config.result_cap,
            ancestor_levels: config.ancestor_levels,
            feature_cap: config.feature_cap,
            class_feature_cap: config.class_feature_cap,
            max_heading_chars: config.max_heading_chars,
            min_feature_chars: config.min_feature_chars,
            max_feature_chars: config.max_feature_chars,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Case-insensitive alternation of escaped terms. ASCII terms are
/// word-bounded; non-ASCII terms match as substrings, because `\b` never
/// fires between adjacent CJK word characters ("무료로", "完全免费使用")
/// and those scripts do not separate words with spaces.
fn word_bounded_set(terms: &[String]) -> String {
    if terms.is_empty() {
        return NEVER_MATCH.to_string();
    }
    let parts: Vec<String> = terms
        .iter()
        .map(|t| {
            let escaped = regex::escape(t);
            if t.is_ascii() {
                format!(r"\b{escaped}\b")
            } else {
                escaped
            }
        })
        .collect();
    format!(r"(?i)(?:{})", parts.join("|"))
}

/// Case-insensitive substring alternation of escaped terms.
fn substring_set(terms: &[String]) -> String {
    if terms.is_empty() {
        return NEVER_MATCH.to_string();
    }
    let escaped: Vec<String> = terms.iter().map(|t| regex::escape(t)).collect();
    format!(r"(?i)(?:{})", escaped.join("|"))
}

fn compile_or_never(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => {
            debug!(pattern, "skipping malformed keyword pattern");
            Regex::new(NEVER_MATCH).expect("never-match pattern is valid")
        }
    }
}
