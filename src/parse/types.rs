//! Metadata record produced by the extractor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SEO and social metadata extracted from one page.
///
/// Created once per fetch and never mutated afterwards. Serialized with
/// camelCase field names; absent optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// The page URL the metadata was extracted for (always present)
    pub url: String,

    /// Page title, from `<title>` or the first `<h1>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta description, or the start of the first paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Featured image, resolved against the page URL when relative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `<link rel="canonical">` target as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    /// `application-name` / `og:site_name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// `type` / `og:type`, serialized as `type`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
    /// Author from meta tags, `<address>` or `rel="author"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// `<html lang>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Comma-separated keywords in document order (not deduplicated)
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Raw date string, not parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    /// Raw date string, not parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    /// Favicon, resolved against the page URL when relative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// `theme-color` meta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    /// `twitter:card` meta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    /// `twitter:site` meta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    /// `twitter:creator` meta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,
    /// `robots` meta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_directive: Option<String>,
    /// `viewport` meta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    /// Parsed JSON-LD blocks in document order; unparseable blocks are skipped
    #[serde(default)]
    pub structured_data: Vec<serde_json::Value>,
    /// `og:*` properties; a later tag with the same property overwrites an earlier one
    #[serde(default)]
    pub open_graph: BTreeMap<String, String>,
    /// Every meta name/property with content; a later tag with the same key overwrites an earlier one
    #[serde(default)]
    pub meta_tags: BTreeMap<String, String>,
}

impl MetadataRecord {
    /// Creates an empty record for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            description: None,
            image: None,
            canonical_url: None,
            site_name: None,
            page_type: None,
            author: None,
            language: None,
            keywords: Vec::new(),
            published_time: None,
            modified_time: None,
            favicon: None,
            theme_color: None,
            twitter_card: None,
            twitter_site: None,
            twitter_creator: None,
            robots_directive: None,
            viewport: None,
            structured_data: Vec::new(),
            open_graph: BTreeMap::new(),
            meta_tags: BTreeMap::new(),
        }
    }
}
