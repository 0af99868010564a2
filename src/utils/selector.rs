//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that matches nothing, used when a dynamic selector fails to parse.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector built at runtime, with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing,
/// so a bad lookup degrades to "not found" instead of aborting extraction.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "meta name lookup")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        parse_selector_unsafe(MATCH_NOTHING, "fallback selector")
    })
}

/// Parses a CSS selector that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

/// Builds an exact-match attribute selector such as `meta[name="description"]`.
///
/// Quotes and backslashes in `value` are escaped so arbitrary meta names
/// (`article:published_time`, `og:image`) stay a single attribute value.
pub fn attribute_selector(element: &str, attribute: &str, value: &str) -> Selector {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    let selector_str = format!(r#"{element}[{attribute}="{escaped}"]"#);
    parse_selector_with_fallback(&selector_str, "attribute lookup")
}
