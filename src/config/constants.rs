//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits and the heuristic thresholds of the
//! evaluators.

// Network operation timeouts
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default metadata fetch timeout in milliseconds
pub const DEFAULT_METADATA_TIMEOUT_MS: u64 = 5000;
/// Smallest metadata fetch timeout a caller may request
pub const MIN_METADATA_TIMEOUT_MS: u64 = 1000;
/// Largest metadata fetch timeout a caller may request
pub const MAX_METADATA_TIMEOUT_MS: u64 = 10_000;

/// Default User-Agent string for outbound requests.
///
/// Browser-like so that homepages render the same markup they serve to
/// visitors. Used for the AdSense homepage fetch and for robots.txt and
/// sitemap.xml. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// User-Agent sent by the metadata fetch when the caller does not supply one.
pub const DEFAULT_METADATA_USER_AGENT: &str = concat!("site_audit/", env!("CARGO_PKG_VERSION"));

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger bodies are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Metadata extraction
/// Characters kept from the first paragraph when it stands in for a description
pub const DESCRIPTION_FALLBACK_MAX_CHARS: usize = 200;
/// Paragraphs this short (or shorter) are never used as a description
pub const DESCRIPTION_FALLBACK_MIN_CHARS: usize = 10;
/// Declared image dimension (width or height) above which an `<img>` counts as a featured image
pub const FALLBACK_IMAGE_MIN_DIMENSION: u32 = 200;

// AdSense checklist
/// Number of checks in the AdSense readiness checklist
pub const ADSENSE_TOTAL_CHECKS: usize = 8;
/// The homepage body must contain more words than this
pub const MIN_CONTENT_WORDS: usize = 700;
/// The `<nav>` element must contain more links than this
pub const MIN_NAV_LINKS: usize = 2;

// API server
/// Default bind address of the API server
pub const DEFAULT_API_HOST: &str = "127.0.0.1";
/// Default port of the API server
pub const DEFAULT_API_PORT: u16 = 8080;
