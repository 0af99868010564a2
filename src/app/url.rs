//! URL and request parameter validation.

use url::Url;

use crate::config::{MAX_METADATA_TIMEOUT_MS, MAX_URL_LENGTH, MIN_METADATA_TIMEOUT_MS};
use crate::error_handling::AuditError;

/// Validates that `url` is a well-formed absolute http(s) URL.
///
/// Unlike a browser address bar, no scheme is guessed: `example.com` is rejected.
/// Rejects URLs longer than `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `AuditError::InvalidUrl` describing why the input was rejected.
pub fn validate_absolute_url(url: &str) -> Result<Url, AuditError> {
    let invalid = |reason: String| AuditError::InvalidUrl {
        url: url.chars().take(100).collect(),
        reason,
    };

    if url.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "URL exceeds maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("URL has no host".to_string()));
    }

    Ok(parsed)
}

/// Validates a caller-supplied metadata fetch timeout.
///
/// # Errors
///
/// Returns `AuditError::InvalidInput` when the timeout is outside
/// `MIN_METADATA_TIMEOUT_MS..=MAX_METADATA_TIMEOUT_MS`.
pub fn validate_timeout_ms(timeout_ms: u64) -> Result<u64, AuditError> {
    if (MIN_METADATA_TIMEOUT_MS..=MAX_METADATA_TIMEOUT_MS).contains(&timeout_ms) {
        Ok(timeout_ms)
    } else {
        Err(AuditError::InvalidInput(format!(
            "timeout must be between {} and {} ms, got {}",
            MIN_METADATA_TIMEOUT_MS, MAX_METADATA_TIMEOUT_MS, timeout_ms
        )))
    }
}
