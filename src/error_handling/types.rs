//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of a single outbound fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The fetch did not complete within the caller's timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The server answered with a non-success status.
    #[error("Failed to fetch URL: {0}")]
    Status(StatusCode),

    /// The response is not an HTML document.
    #[error("URL does not return HTML content: {0}")]
    NotHtml(String),

    /// The response body is larger than the configured limit.
    #[error("response body exceeds {0} bytes")]
    BodyTooLarge(usize),

    /// Transport-level failure (DNS, connect, TLS, body read, ...).
    #[error("{kind}: {source}")]
    Request {
        /// Category of the failure
        kind: ErrorType,
        /// Underlying reqwest error
        #[source]
        source: ReqwestError,
    },
}

impl From<ReqwestError> for FetchError {
    fn from(source: ReqwestError) -> Self {
        FetchError::Request {
            kind: super::categorize_reqwest_error(&source),
            source,
        }
    }
}

/// Errors returned at the boundary of an audit operation.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The URL is not a well-formed absolute http(s) URL. Raised before any network access.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A request parameter other than the URL is out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The metadata page could not be fetched.
    #[error("Failed to fetch or parse metadata: {0}")]
    Metadata(#[source] FetchError),

    /// sitemap.xml could not be fetched; there is nothing to report without it.
    #[error("Could not fetch sitemap.xml: {0}")]
    SitemapUnavailable(#[source] FetchError),
}

impl AuditError {
    /// Returns `true` for input validation failures (as opposed to network failures).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AuditError::InvalidUrl { .. } | AuditError::InvalidInput(_)
        )
    }
}

/// Categories of transport errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The request could not be built (bad header value, unusable URL).
    HttpRequestBuilderError,
    /// Redirect loop or too many redirects.
    HttpRequestRedirectError,
    /// Non-2xx status not covered by a more specific variant.
    HttpRequestStatusError,
    /// The request timed out.
    HttpRequestTimeoutError,
    /// Generic request failure.
    HttpRequestRequestError,
    /// DNS or TCP/TLS connection failure.
    HttpRequestConnectError,
    /// Reading the response body failed.
    HttpRequestBodyError,
    /// The response body could not be decoded.
    HttpRequestDecodeError,
    /// Anything reqwest does not classify.
    HttpRequestOtherError,
    /// 429 Too Many Requests.
    HttpRequestTooManyRequests,
    /// 403 Forbidden, typically bot detection.
    HttpRequestBotDetectionError,
    /// 404 Not Found.
    HttpRequestNotFound,
    /// 5xx server error.
    HttpRequestServerError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestServerError => "Server error (5xx)",
        }
    }
}
