//! Shared helpers for integration tests.

#![allow(dead_code)]

use site_audit::initialization::init_client;
use site_audit::{AuditContext, Config};
use wiremock::{Match, Request, ResponseTemplate};

/// Audit context with the default configuration.
pub fn test_context() -> AuditContext {
    let config = Config::default();
    let client = init_client(&config).expect("client should build with default config");
    AuditContext::new(client, &config)
}

/// 200 response with an HTML body.
pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

/// 200 response with a plain-text body.
pub fn text(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/plain")
}

/// 200 response with an XML body.
pub fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/xml")
}

/// A homepage that passes every checklist item.
pub fn complete_homepage() -> String {
    let words = vec!["content"; 750].join(" ");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>Complete homepage</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <script async src="https://www.googletagmanager.com/gtag/js?id=G-TEST"></script>
    <script src="/assets/gtag.js"></script>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
        <a href="/contact">Contact</a>
        <a href="/privacy-policy">Privacy</a>
    </nav>
    <main><p>{words}</p></main>
    <footer>Footer</footer>
</body>
</html>"#
    )
}

/// Matches a request header against its full value.
///
/// `wiremock::matchers::header` splits values on commas, which breaks
/// Accept lists and browser user agents.
pub struct RawHeader {
    name: &'static str,
    value: String,
}

/// Matcher for the exact, unsplit value of header `name`.
pub fn raw_header(name: &'static str, value: impl Into<String>) -> RawHeader {
    RawHeader {
        name,
        value: value.into(),
    }
}

impl Match for RawHeader {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get(self.name)
            .and_then(|v| v.to_str().ok())
            == Some(self.value.as_str())
    }
}
