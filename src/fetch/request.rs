//! HTTP request building and response body reading.

use futures::StreamExt;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use url::Url;

use crate::config::ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_VALUE;
use crate::error_handling::FetchError;

/// Sends a GET request with the standard audit headers.
///
/// `user_agent` overrides the client's default User-Agent for this request.
/// Redirects are followed by the client. The response is returned whatever
/// its status; callers decide what a non-success status means.
pub(crate) async fn send_get(
    client: &reqwest::Client,
    url: &Url,
    accept: &str,
    user_agent: Option<&str>,
) -> Result<reqwest::Response, FetchError> {
    let mut builder = client
        .get(url.clone())
        .header(ACCEPT, accept)
        .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE);
    if let Some(agent) = user_agent {
        builder = builder.header(USER_AGENT, agent);
    }

    let response = builder.send().await?;
    log::debug!("GET {} -> {}", url, response.status());
    Ok(response)
}

/// Reads the response body as text, aborting once it exceeds `max_size` bytes.
///
/// The body is streamed so an oversized response is never fully buffered.
/// Invalid UTF-8 is replaced rather than rejected.
pub(crate) async fn read_body_with_limit(
    response: reqwest::Response,
    max_size: usize,
) -> Result<String, FetchError> {
    if let Some(length) = response.content_length() {
        if length > max_size as u64 {
            log::debug!(
                "Declared body of {} bytes exceeds limit of {} bytes",
                length,
                max_size
            );
            return Err(FetchError::BodyTooLarge(max_size));
        }
    }

    let mut stream = response.bytes_stream();
    let mut buf = Vec::with_capacity(max_size.min(64 * 1024));

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > max_size {
            log::debug!(
                "Body exceeds {}KB limit (aborting at {} bytes)",
                max_size / 1024,
                buf.len() + chunk.len()
            );
            return Err(FetchError::BodyTooLarge(max_size));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Returns the response's `Content-Type` header, or an empty string.
pub(crate) fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
