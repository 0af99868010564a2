//! The individual checklist items.
//!
//! Each check is a pure function over the fetched homepage. None depends on
//! another's outcome.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::types::{CheckStatus, ResultItem, SubCheck};
use crate::config::{MIN_CONTENT_WORDS, MIN_NAV_LINKS};
use crate::parse::has_analytics_script;
use crate::utils::parse_selector_unsafe;

/// The fetched homepage every check runs against.
pub(super) struct Homepage<'a> {
    pub url: &'a str,
    pub html: &'a str,
    pub document: Html,
}

impl<'a> Homepage<'a> {
    pub(super) fn new(url: &'a str, html: &'a str) -> Self {
        Self {
            url,
            html,
            document: Html::parse_document(html),
        }
    }

    fn has(&self, selector: &Selector) -> bool {
        self.document.select(selector).next().is_some()
    }
}

const NOINDEX_SELECTOR_STR: &str = r#"meta[name="robots"][content*="noindex"]"#;
const VIEWPORT_SELECTOR_STR: &str = r#"meta[name="viewport"]"#;
const BODY_SELECTOR_STR: &str = "body";
const ABOUT_LINK_SELECTOR_STR: &str = r#"a[href*="about"]"#;
const CONTACT_LINK_SELECTOR_STR: &str = r#"a[href*="contact"]"#;
const PRIVACY_LINK_SELECTOR_STR: &str = r#"a[href*="privacy"], a[href*="policy"]"#;
const NAV_SELECTOR_STR: &str = "nav";
const LINK_SELECTOR_STR: &str = "a";
const FOOTER_SELECTOR_STR: &str = "footer";

static NOINDEX_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(NOINDEX_SELECTOR_STR, "NOINDEX_SELECTOR"));
static VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(VIEWPORT_SELECTOR_STR, "VIEWPORT_SELECTOR"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(BODY_SELECTOR_STR, "BODY_SELECTOR"));
static ABOUT_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ABOUT_LINK_SELECTOR_STR, "ABOUT_LINK_SELECTOR"));
static CONTACT_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CONTACT_LINK_SELECTOR_STR, "CONTACT_LINK_SELECTOR"));
static PRIVACY_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PRIVACY_LINK_SELECTOR_STR, "PRIVACY_LINK_SELECTOR"));
static NAV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(NAV_SELECTOR_STR, "NAV_SELECTOR"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINK_SELECTOR_STR, "LINK_SELECTOR"));
static FOOTER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(FOOTER_SELECTOR_STR, "FOOTER_SELECTOR"));

pub(super) type Check = fn(&Homepage<'_>) -> ResultItem;

/// The checklist, in report order.
pub(super) const CHECKS: [Check; 8] = [
    uses_https,
    is_indexable,
    has_mobile_viewport,
    has_sufficient_content,
    has_essential_pages,
    has_clear_navigation,
    has_footer,
    has_traffic_analytics,
];

fn uses_https(page: &Homepage<'_>) -> ResultItem {
    if page.url.starts_with("https://") {
        ResultItem::new(
            "Uses HTTPS (SSL)",
            CheckStatus::Pass,
            "Your site is secure, which is a fundamental requirement.",
            true,
        )
    } else {
        ResultItem::new(
            "Uses HTTPS (SSL)",
            CheckStatus::Fail,
            "Your site must use HTTPS. Get a free SSL certificate from your host.",
            true,
        )
    }
}

fn is_indexable(page: &Homepage<'_>) -> ResultItem {
    if !page.has(&NOINDEX_SELECTOR) {
        ResultItem::new(
            "Site is Indexable",
            CheckStatus::Pass,
            "Your site is not blocking search engines from indexing it.",
            true,
        )
    } else {
        ResultItem::new(
            "Site is Indexable",
            CheckStatus::Fail,
            "A 'noindex' meta tag was found, which tells Google not to list your site. This must be removed.",
            true,
        )
    }
}

fn has_mobile_viewport(page: &Homepage<'_>) -> ResultItem {
    if page.has(&VIEWPORT_SELECTOR) {
        ResultItem::new(
            "Mobile Viewport",
            CheckStatus::Pass,
            "A viewport tag was found, which is essential for mobile-friendliness.",
            false,
        )
    } else {
        ResultItem::new(
            "Mobile Viewport",
            CheckStatus::Warn,
            "The viewport meta tag is missing. Your site may not render correctly on mobile devices.",
            false,
        )
    }
}

/// Whitespace-separated words in the `<body>` text, scripts included.
pub(super) fn body_word_count(document: &Html) -> usize {
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| body.text().collect::<String>().split_whitespace().count())
        .unwrap_or(0)
}

fn has_sufficient_content(page: &Homepage<'_>) -> ResultItem {
    let words = body_word_count(&page.document);
    let status = if words > MIN_CONTENT_WORDS {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    ResultItem::new(
        "Sufficient Content",
        status,
        format!(
            "Found ~{words} words on the homepage. Aim for at least {MIN_CONTENT_WORDS} words of high-quality content per page."
        ),
        true,
    )
}

fn has_essential_pages(page: &Homepage<'_>) -> ResultItem {
    let about = page.has(&ABOUT_LINK_SELECTOR);
    let contact = page.has(&CONTACT_LINK_SELECTOR);
    let privacy = page.has(&PRIVACY_LINK_SELECTOR);

    let status = if about && contact && privacy {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    let mut item = ResultItem::new(
        "Essential Pages",
        status,
        "Your site must have these pages to build trust with users and advertisers.",
        true,
    );
    item.sub_checks = Some(vec![
        SubCheck {
            text: "About Page".to_string(),
            status: about,
        },
        SubCheck {
            text: "Contact Page".to_string(),
            status: contact,
        },
        SubCheck {
            text: "Privacy Policy".to_string(),
            status: privacy,
        },
    ]);
    item
}

fn nav_link_count(nav: ElementRef<'_>) -> usize {
    nav.select(&LINK_SELECTOR).count()
}

fn has_clear_navigation(page: &Homepage<'_>) -> ResultItem {
    // Only the first <nav> counts
    let links = page
        .document
        .select(&NAV_SELECTOR)
        .next()
        .map(nav_link_count);

    match links {
        Some(count) if count > MIN_NAV_LINKS => ResultItem::new(
            "Clear Navigation",
            CheckStatus::Pass,
            format!("A <nav> element with {count} links was found."),
            true,
        ),
        _ => ResultItem::new(
            "Clear Navigation",
            CheckStatus::Fail,
            "A clear navigation menu (<nav>) with multiple links is needed for users to explore your site.",
            true,
        ),
    }
}

fn has_footer(page: &Homepage<'_>) -> ResultItem {
    if page.has(&FOOTER_SELECTOR) {
        ResultItem::new(
            "Complete Site Structure",
            CheckStatus::Pass,
            "A <footer> element was found, signaling a complete site design.",
            false,
        )
    } else {
        ResultItem::new(
            "Complete Site Structure",
            CheckStatus::Warn,
            "A site footer is expected on a complete, professional website.",
            false,
        )
    }
}

fn has_traffic_analytics(page: &Homepage<'_>) -> ResultItem {
    if has_analytics_script(page.html) {
        ResultItem::new(
            "Traffic Analytics",
            CheckStatus::Pass,
            "Google Analytics seems to be installed, a good sign of a serious project.",
            false,
        )
    } else {
        ResultItem::new(
            "Traffic Analytics",
            CheckStatus::Warn,
            "Installing analytics helps you understand your audience, which is key to creating valuable content.",
            false,
        )
    }
}
