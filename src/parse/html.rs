//! Page-level field extraction.
//!
//! This module extracts the single-valued fields of a [`MetadataRecord`](super::MetadataRecord):
//! - Meta tag lookups (`<meta name>` first, then `<meta property>`)
//! - Page title with `<h1>` fallback
//! - Description with first-paragraph fallback
//! - Featured image with `<img>` fallback
//! - Favicon, canonical link, language and author

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::{
    DESCRIPTION_FALLBACK_MAX_CHARS, DESCRIPTION_FALLBACK_MIN_CHARS, FALLBACK_IMAGE_MIN_DIMENSION,
};
use crate::utils::{attribute_selector, element_text, parse_selector_unsafe, truncate_chars};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const H1_SELECTOR_STR: &str = "h1";
const PARAGRAPH_SELECTOR_STR: &str = "p";
const IMG_SELECTOR_STR: &str = "img";
const HTML_SELECTOR_STR: &str = "html";
const CANONICAL_SELECTOR_STR: &str = r#"link[rel="canonical"]"#;
const ICON_SELECTOR_STR: &str = r#"link[rel="icon"]"#;
const SHORTCUT_ICON_SELECTOR_STR: &str = r#"link[rel="shortcut icon"]"#;
const ADDRESS_SELECTOR_STR: &str = "address";
const REL_AUTHOR_SELECTOR_STR: &str = r#"[rel="author"]"#;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PARAGRAPH_SELECTOR_STR, "PARAGRAPH_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(IMG_SELECTOR_STR, "IMG_SELECTOR"));
static HTML_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(HTML_SELECTOR_STR, "HTML_SELECTOR"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static ICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ICON_SELECTOR_STR, "ICON_SELECTOR"));
static SHORTCUT_ICON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(SHORTCUT_ICON_SELECTOR_STR, "SHORTCUT_ICON_SELECTOR")
});
static ADDRESS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ADDRESS_SELECTOR_STR, "ADDRESS_SELECTOR"));
static REL_AUTHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(REL_AUTHOR_SELECTOR_STR, "REL_AUTHOR_SELECTOR"));

/// Looks up a meta tag's content by `name`, falling back to `property`.
///
/// Only the first tag with a given name (or property) is considered. An empty
/// `content` counts as absent. Pass an empty `property` to skip the fallback.
pub fn meta_content(document: &Html, name: &str, property: &str) -> Option<String> {
    first_content(document, "name", name).or_else(|| {
        if property.is_empty() {
            None
        } else {
            first_content(document, "property", property)
        }
    })
}

fn first_content(document: &Html, attribute: &str, value: &str) -> Option<String> {
    let selector = attribute_selector("meta", attribute, value);
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

/// Extracts the page title.
///
/// Uses the text of the first `<title>` as written, surrounding whitespace
/// included; when that is missing or empty, falls back to the trimmed text
/// of the first `<h1>`.
pub fn extract_title(document: &Html) -> Option<String> {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>())
        .filter(|t| !t.is_empty());

    title.or_else(|| {
        log::debug!("No <title> text, falling back to first <h1>");
        document
            .select(&H1_SELECTOR)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    })
}

/// Extracts the description, falling back to the first paragraph.
///
/// The paragraph is only used when its trimmed text is longer than
/// `DESCRIPTION_FALLBACK_MIN_CHARS`; it is cut to
/// `DESCRIPTION_FALLBACK_MAX_CHARS` characters with `...` appended when cut.
pub fn extract_description(document: &Html) -> Option<String> {
    if let Some(description) = meta_content(document, "description", "og:description") {
        return Some(description);
    }

    let text = element_text(document.select(&PARAGRAPH_SELECTOR).next()?);
    if text.chars().count() <= DESCRIPTION_FALLBACK_MIN_CHARS {
        return None;
    }

    let (head, truncated) = truncate_chars(&text, DESCRIPTION_FALLBACK_MAX_CHARS);
    if truncated {
        Some(format!("{head}..."))
    } else {
        Some(head.to_string())
    }
}

/// Extracts the featured image, resolved against `base`.
///
/// Uses the `image` / `og:image` meta tag; otherwise the first `<img>` with a
/// `src` whose declared width or height exceeds `FALLBACK_IMAGE_MIN_DIMENSION`,
/// or that declares neither dimension.
pub fn extract_image(document: &Html, base: Option<&Url>) -> Option<String> {
    if let Some(image) = meta_content(document, "image", "og:image") {
        return Some(resolve_url(base, &image));
    }

    document.select(&IMG_SELECTOR).find_map(|img| {
        let element = img.value();
        let src = element.attr("src").filter(|s| !s.is_empty())?;
        let width = element.attr("width").and_then(parse_dimension);
        let height = element.attr("height").and_then(parse_dimension);

        let large = width.is_some_and(|w| w > FALLBACK_IMAGE_MIN_DIMENSION)
            || height.is_some_and(|h| h > FALLBACK_IMAGE_MIN_DIMENSION);
        let size_unknown = width.is_none() && height.is_none();

        (large || size_unknown).then(|| resolve_url(base, src))
    })
}

/// Parses a declared `width`/`height` attribute the lenient way browsers do:
/// leading digits only (`"300px"` is 300). Zero or unparseable values count as undeclared.
pub(crate) fn parse_dimension(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u32>().ok().filter(|&d| d > 0)
}

/// Extracts the favicon (`rel="icon"`, else `rel="shortcut icon"`), resolved against `base`.
pub fn extract_favicon(document: &Html, base: Option<&Url>) -> Option<String> {
    let link = document
        .select(&ICON_SELECTOR)
        .next()
        .or_else(|| document.select(&SHORTCUT_ICON_SELECTOR).next())?;
    let href = link.value().attr("href").filter(|h| !h.is_empty())?;
    Some(resolve_url(base, href))
}

/// Extracts the canonical link target, as written in the document.
pub fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|link| link.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

/// Extracts the `<html lang>` attribute.
pub fn extract_language(document: &Html) -> Option<String> {
    document
        .select(&HTML_SELECTOR)
        .next()
        .and_then(|html| html.value().attr("lang"))
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

/// Extracts the author: `author` / `article:author` meta, else the first
/// `<address>` text, else the text of the first `rel="author"` element.
pub fn extract_author(document: &Html) -> Option<String> {
    meta_content(document, "author", "article:author")
        .or_else(|| first_text(document, &ADDRESS_SELECTOR))
        .or_else(|| first_text(document, &REL_AUTHOR_SELECTOR))
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

/// Resolves `href` against the page URL.
///
/// On failure (no usable base, or an href the URL parser rejects) the raw
/// href is kept rather than dropping the field.
pub(crate) fn resolve_url(base: Option<&Url>, href: &str) -> String {
    let resolved = match base {
        Some(base) => base.join(href).map(|u| u.to_string()),
        None => Url::parse(href).map(|u| u.to_string()),
    };
    resolved.unwrap_or_else(|e| {
        log::debug!("Keeping unresolved URL '{}': {}", href, e);
        href.to_string()
    })
}
