//! Outbound HTTP and the metadata fetch operation.
//!
//! Every fetch goes through the shared client in [`AuditContext`], sends the
//! same `Accept-Language`, and reads bodies with a size cap. Only the
//! metadata fetch is bounded by a timeout of its own; the homepage, robots.txt
//! and sitemap.xml fetches rely on the client's connect timeout.

mod context;
mod request;

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::app::{validate_absolute_url, validate_timeout_ms};
use crate::config::{ACCEPT_HTML, HTML_CONTENT_TYPE};
use crate::error_handling::{AuditError, FetchError};
use crate::parse::{extract_metadata, MetadataRecord};

pub use context::AuditContext;
pub(crate) use request::{read_body_with_limit, send_get};

/// Parameters of a metadata fetch.
///
/// Deserializes from `{"url": ..., "timeout": ..., "userAgent": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRequest {
    /// Absolute http(s) URL of the page
    pub url: String,
    /// Timeout in milliseconds covering the whole fetch (1000-10000)
    #[serde(default, rename = "timeout")]
    pub timeout_ms: Option<u64>,
    /// User-Agent to send instead of the default metadata User-Agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl MetadataRequest {
    /// Creates a request for `url` with the default timeout and User-Agent.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Fetches a page and extracts its metadata.
///
/// The URL and timeout are validated before any network access. The timeout
/// covers connecting, the response headers and the body. A non-success
/// status or a `Content-Type` that is not `text/html` fails the fetch.
///
/// # Errors
///
/// - `AuditError::InvalidUrl` / `AuditError::InvalidInput` for bad input
/// - `AuditError::Metadata` wrapping the `FetchError` for network failures
pub async fn fetch_metadata(
    ctx: &AuditContext,
    request: &MetadataRequest,
) -> Result<MetadataRecord, AuditError> {
    let url = validate_absolute_url(&request.url)?;
    let timeout_ms = validate_timeout_ms(request.timeout_ms.unwrap_or(ctx.metadata_timeout_ms))?;
    let user_agent = request
        .user_agent
        .as_deref()
        .filter(|agent| !agent.trim().is_empty())
        .unwrap_or(&ctx.metadata_user_agent);

    log::info!("Fetching metadata for {} (timeout {} ms)", url, timeout_ms);

    let html = match tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        fetch_html(ctx, &url, user_agent),
    )
    .await
    {
        Ok(Ok(html)) => html,
        Ok(Err(e)) => {
            log::warn!("Metadata fetch failed for {}: {}", url, e);
            return Err(AuditError::Metadata(e));
        }
        Err(_) => {
            log::warn!("Metadata fetch timed out for {} after {} ms", url, timeout_ms);
            return Err(AuditError::Metadata(FetchError::Timeout(timeout_ms)));
        }
    };

    Ok(extract_metadata(&html, url.as_str()))
}

async fn fetch_html(ctx: &AuditContext, url: &Url, user_agent: &str) -> Result<String, FetchError> {
    let response = send_get(&ctx.client, url, ACCEPT_HTML, Some(user_agent)).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let content_type = request::content_type(&response);
    if !content_type.contains(HTML_CONTENT_TYPE) {
        return Err(FetchError::NotHtml(content_type));
    }

    read_body_with_limit(response, ctx.max_body_bytes).await
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
