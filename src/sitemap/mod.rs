//! Sitemap crawlability check.
//!
//! Reads the site's robots.txt and sitemap.xml and reports, for every URL in
//! the sitemap, whether the `User-agent: *` Disallow rules allow crawling it.

mod robots;
mod xml;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::validate_absolute_url;
use crate::config::ACCEPT_ANY;
use crate::error_handling::{AuditError, FetchError};
use crate::fetch::{read_body_with_limit, send_get, AuditContext};

pub use robots::{is_crawlable, parse_disallow_rules};
pub use xml::extract_sitemap_urls;

/// Crawlability of one sitemap URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// The URL as listed in the sitemap
    pub url: String,
    /// `false` when a Disallow rule for `User-agent: *` covers it
    pub crawlable: bool,
}

/// Checks every sitemap.xml URL of `site_url` against its robots.txt.
///
/// robots.txt and sitemap.xml are read from the root of the site. A missing
/// or unreadable robots.txt means no rules. Results follow sitemap order,
/// duplicates included.
///
/// # Errors
///
/// - `AuditError::InvalidUrl` if `site_url` is not an absolute http(s) URL
/// - `AuditError::SitemapUnavailable` if sitemap.xml cannot be fetched
pub async fn check_sitemap(
    ctx: &AuditContext,
    site_url: &str,
) -> Result<Vec<CrawlResult>, AuditError> {
    let site_url = site_url.trim();
    let base = validate_absolute_url(site_url)?;
    log::info!("Checking sitemap crawlability for {}", base);

    let robots_url = join_root(&base, "/robots.txt")?;
    let rules = match fetch_robots(ctx, &robots_url).await {
        Some(robots_txt) => parse_disallow_rules(&robots_txt),
        None => Vec::new(),
    };
    log::debug!("{} Disallow rules apply to all agents", rules.len());

    let sitemap_url = join_root(&base, "/sitemap.xml")?;
    let sitemap = fetch_sitemap(ctx, &sitemap_url).await.map_err(|e| {
        log::warn!("Could not fetch {}: {}", sitemap_url, e);
        AuditError::SitemapUnavailable(e)
    })?;

    let results: Vec<CrawlResult> = extract_sitemap_urls(&sitemap)
        .into_iter()
        .map(|url| {
            let crawlable = is_crawlable(&url, site_url, &rules);
            CrawlResult { url, crawlable }
        })
        .collect();

    log::info!(
        "{} sitemap URLs, {} blocked by robots.txt",
        results.len(),
        results.iter().filter(|r| !r.crawlable).count()
    );
    Ok(results)
}

fn join_root(base: &Url, path: &str) -> Result<Url, AuditError> {
    base.join(path).map_err(|e| AuditError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

/// Returns the robots.txt body, or `None` when it cannot be read.
async fn fetch_robots(ctx: &AuditContext, url: &Url) -> Option<String> {
    let response = match send_get(&ctx.client, url, ACCEPT_ANY, None).await {
        Ok(response) => response,
        Err(e) => {
            log::debug!("No robots.txt at {}: {}", url, e);
            return None;
        }
    };
    if !response.status().is_success() {
        log::debug!("No robots.txt at {}: {}", url, response.status());
        return None;
    }
    match read_body_with_limit(response, ctx.max_body_bytes).await {
        Ok(body) => Some(body),
        Err(e) => {
            log::debug!("Ignoring unreadable robots.txt at {}: {}", url, e);
            None
        }
    }
}

async fn fetch_sitemap(ctx: &AuditContext, url: &Url) -> Result<String, FetchError> {
    let response = send_get(&ctx.client, url, ACCEPT_ANY, None).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    read_body_with_limit(response, ctx.max_body_bytes).await
}
