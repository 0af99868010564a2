//! Analytics script detection.
//!
//! Looks for the Google Analytics loaders (`gtag.js`, `analytics.js`) in raw
//! HTML, including inline bootstrap snippets that only name the script in a
//! string literal.

use regex::Regex;
use std::sync::LazyLock;

const ANALYTICS_SCRIPT_PATTERN: &str = r"gtag\.js|analytics\.js";

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails (a programming error).
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static ANALYTICS_SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ANALYTICS_SCRIPT_PATTERN, "ANALYTICS_SCRIPT_RE"));

/// Returns `true` when the raw HTML references `gtag.js` or `analytics.js`.
///
/// Matching is on the unparsed text, so a reference inside a comment counts too.
pub fn has_analytics_script(html: &str) -> bool {
    ANALYTICS_SCRIPT_RE.is_match(html)
}
