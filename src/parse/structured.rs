//! Structured data extraction.
//!
//! This module extracts the multi-valued parts of a page's metadata:
//! - JSON-LD (`<script type="application/ld+json">`)
//! - Open Graph meta tags (`og:*`)
//! - Every named meta tag
//! - Comma-separated keywords

use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

const JSON_LD_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;
const OPEN_GRAPH_SELECTOR_STR: &str = r#"meta[property^="og:"]"#;
const META_SELECTOR_STR: &str = "meta";

static JSON_LD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(JSON_LD_SELECTOR_STR, "JSON_LD_SELECTOR"));
static OPEN_GRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OPEN_GRAPH_SELECTOR_STR, "OPEN_GRAPH_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_SELECTOR_STR, "META_SELECTOR"));

/// Extracts JSON-LD blocks in document order.
///
/// Each block is parsed on its own; a block that is not valid JSON is logged
/// and skipped without affecting the others. A block holding a JSON array is
/// kept as one array value.
pub fn extract_json_ld(document: &Html) -> Vec<serde_json::Value> {
    document
        .select(&JSON_LD_SELECTOR)
        .enumerate()
        .filter_map(|(index, script)| {
            let text: String = script.text().collect();
            match serde_json::from_str::<serde_json::Value>(text.trim()) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Skipping malformed JSON-LD block #{}: {}", index, e);
                    None
                }
            }
        })
        .collect()
}

/// Extracts Open Graph properties.
///
/// Keyed by the full property name (`og:title`). Tags without content are
/// ignored; when a property repeats, the last tag wins.
pub fn extract_open_graph(document: &Html) -> BTreeMap<String, String> {
    let mut og_tags = BTreeMap::new();
    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        let value = element.value();
        if let (Some(property), Some(content)) = (value.attr("property"), value.attr("content")) {
            if !content.is_empty() {
                // Overwrites on duplicate property: last tag wins
                og_tags.insert(property.to_string(), content.to_string());
            }
        }
    }
    og_tags
}

/// Collects every `<meta>` with a key and non-empty content.
///
/// The key is the `name` attribute, or `property` when `name` is absent or
/// empty; both kinds share one map. When a key repeats, the last tag wins.
pub fn extract_meta_tags(document: &Html) -> BTreeMap<String, String> {
    let mut meta_tags = BTreeMap::new();
    for element in document.select(&META_SELECTOR) {
        let value = element.value();
        let key = value
            .attr("name")
            .filter(|n| !n.is_empty())
            .or_else(|| value.attr("property").filter(|p| !p.is_empty()));
        let content = value.attr("content").filter(|c| !c.is_empty());
        if let (Some(key), Some(content)) = (key, content) {
            meta_tags.insert(key.to_string(), content.to_string());
        }
    }
    meta_tags
}

/// Splits a keywords meta value on commas.
///
/// Tokens are trimmed and empty tokens dropped; order and duplicates are kept.
pub fn split_keywords(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}
