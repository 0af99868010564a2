//! HTTP header value constants.
//!
//! Header values sent with outbound requests. Header names come from
//! `reqwest::header`.

/// `Accept` value for the metadata fetch (HTML documents only)
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// `Accept` value for homepage, robots.txt and sitemap fetches
pub const ACCEPT_ANY: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,text/plain;q=0.8,*/*;q=0.7";

/// `Accept-Language` value for all outbound requests
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Content type a metadata fetch must declare
pub const HTML_CONTENT_TYPE: &str = "text/html";
