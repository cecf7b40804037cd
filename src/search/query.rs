//! Query cleaning and token extraction.
//!
//! Queries arrive as raw user text. Cleaning collapses whitespace and strips
//! punctuation that never appears in catalog fields, while keeping quotes and
//! hyphens because size tokens (`6"`) and code ranges (`4-12`) depend on them.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPECIALS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[^\w\s\-"']"#).unwrap());
static SIZE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(\d+)["']"#).unwrap());
static SIZE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*inch").unwrap());
static PRESSURE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*psi").unwrap());

/// Clean and normalize a raw search query.
///
/// Collapses runs of whitespace and drops special characters other than
/// quotes and hyphens. Returns an empty string for all-punctuation input;
/// callers reject empty queries before searching.
pub fn clean_query(query: &str) -> String {
    let stripped = SPECIALS.replace_all(query.trim(), "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Extract a size specification from a query, normalized to `N"` form.
///
/// Recognizes `6"`, `6'`, and `6 inch` / `6 inches`.
pub fn extract_size(query: &str) -> Option<String> {
    if let Some(caps) = SIZE_TOKEN.captures(query) {
        return Some(format!("{}\"", &caps[1]));
    }
    if let Some(caps) = SIZE_WORD.captures(query) {
        return Some(format!("{}\"", &caps[1]));
    }
    None
}

/// The leading digits of a size token (`6"` → `"6"`), if the query has one.
///
/// Unlike [`extract_size`] this only matches the quote forms; bare `6 inch`
/// does not trigger the size scoring bonus.
pub(crate) fn size_digits(query: &str) -> Option<&str> {
    SIZE_TOKEN
        .captures(query)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract a pressure specification (`350 PSI`, `250psi`) from a query.
pub fn extract_pressure(query: &str) -> Option<u32> {
    PRESSURE_TOKEN
        .captures(query)
        .and_then(|caps| caps[1].parse().ok())
}
