//! HTML parsing and metadata extraction.
//!
//! This module turns a fetched page into a [`MetadataRecord`]:
//! - Meta tags (description, keywords, Open Graph, Twitter Cards, robots, viewport)
//! - Title, description and image with in-page fallbacks
//! - Structured data (JSON-LD)
//! - Favicon and canonical link
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Extraction
//! never fails: a field that cannot be found is left empty.

mod analytics;
mod html;
mod structured;
mod types;

use log::debug;
use scraper::Html;
use url::Url;

// Re-export public API
pub use analytics::has_analytics_script;
pub use html::{
    extract_author, extract_canonical, extract_description, extract_favicon, extract_image,
    extract_language, extract_title, meta_content,
};
pub use structured::{extract_json_ld, extract_meta_tags, extract_open_graph, split_keywords};
pub use types::MetadataRecord;

/// Extracts SEO and social metadata from `html`.
///
/// `page_url` is copied into the record and is the base for resolving
/// relative image and favicon URLs. Malformed markup is parsed leniently;
/// malformed JSON-LD blocks are skipped.
///
/// # Example
///
/// ```
/// use site_audit::extract_metadata;
///
/// let html = r#"<html><head><title>Hello</title>
///     <meta property="og:title" content="Social title"></head></html>"#;
/// let record = extract_metadata(html, "https://example.com/");
/// assert_eq!(record.title.as_deref(), Some("Hello"));
/// assert_eq!(record.open_graph["og:title"], "Social title");
/// ```
pub fn extract_metadata(html: &str, page_url: &str) -> MetadataRecord {
    let document = Html::parse_document(html);
    let base = Url::parse(page_url).ok();
    let base = base.as_ref();

    let mut record = MetadataRecord::new(page_url);

    record.title = extract_title(&document);
    record.description = extract_description(&document);
    record.image = extract_image(&document, base);
    record.site_name = meta_content(&document, "application-name", "og:site_name");
    record.page_type = meta_content(&document, "type", "og:type");
    record.author = extract_author(&document);
    record.language = extract_language(&document);
    record.canonical_url = extract_canonical(&document);
    record.published_time = meta_content(&document, "article:published_time", "article:published_time")
        .or_else(|| meta_content(&document, "datePublished", "og:published_time"));
    record.modified_time = meta_content(&document, "article:modified_time", "article:modified_time")
        .or_else(|| meta_content(&document, "dateModified", "og:modified_time"));
    record.favicon = extract_favicon(&document, base);
    record.theme_color = meta_content(&document, "theme-color", "theme-color");
    record.twitter_card = meta_content(&document, "twitter:card", "twitter:card");
    record.twitter_site = meta_content(&document, "twitter:site", "twitter:site");
    record.twitter_creator = meta_content(&document, "twitter:creator", "twitter:creator");
    record.robots_directive = meta_content(&document, "robots", "robots");
    record.viewport = meta_content(&document, "viewport", "viewport");
    record.keywords = meta_content(&document, "keywords", "")
        .map(|content| split_keywords(&content))
        .unwrap_or_default();
    record.open_graph = extract_open_graph(&document);
    record.meta_tags = extract_meta_tags(&document);
    record.structured_data = extract_json_ld(&document);

    debug!(
        "Extracted metadata for {page_url}: title={:?}, {} keywords, {} OG tags, {} meta tags, {} JSON-LD blocks",
        record.title,
        record.keywords.len(),
        record.open_graph.len(),
        record.meta_tags.len(),
        record.structured_data.len()
    );

    record
}
