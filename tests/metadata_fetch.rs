//! Metadata fetch and scoring against mock servers.

mod helpers;

use helpers::{html, raw_header, test_context};
use site_audit::{
    fetch_metadata, score_metadata, AuditError, Category, FetchError, MetadataRequest,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BLOG_POST: &str = r#"<!DOCTYPE html>
<html lang="en-GB">
<head>
    <title>How we audit thousands of pages every single day</title>
    <meta name="description" content="A walkthrough of the pipeline that fetches pages, extracts their metadata, and scores the results against search engine guidelines.">
    <meta name="keywords" content="seo, metadata, audit, crawling, rust">
    <meta property="og:title" content="How we audit pages">
    <meta property="og:image" content="/images/cover.png">
    <meta property="og:site_name" content="Example Engineering">
    <meta property="og:type" content="article">
    <meta name="author" content="Sam Example">
    <link rel="canonical" href="https://example.com/blog/audit">
    <link rel="shortcut icon" href="/favicon.ico">
    <script type="application/ld+json">{"@context": "https://schema.org", "@type": "BlogPosting"}</script>
    <script type="application/ld+json">{broken</script>
</head>
<body><h1>How we audit pages</h1><p>Intro paragraph.</p></body>
</html>"#;

#[tokio::test]
async fn test_fetch_and_score_blog_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blog/audit"))
        .and(raw_header("accept-language", "en-US,en;q=0.9"))
        .and(raw_header("accept", "text/html,application/xhtml+xml"))
        .respond_with(html(BLOG_POST))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/blog/audit", server.uri());
    let record = fetch_metadata(&test_context(), &MetadataRequest::new(url.clone()))
        .await
        .expect("metadata fetch should succeed");

    assert_eq!(record.url, url);
    assert_eq!(
        record.title.as_deref(),
        Some("How we audit thousands of pages every single day")
    );
    assert_eq!(record.keywords.len(), 5);
    assert_eq!(record.image, Some(format!("{}/images/cover.png", server.uri())));
    assert_eq!(record.favicon, Some(format!("{}/favicon.ico", server.uri())));
    assert_eq!(record.site_name.as_deref(), Some("Example Engineering"));
    assert_eq!(record.language.as_deref(), Some("en-GB"));
    assert_eq!(record.structured_data.len(), 1);
    assert_eq!(record.open_graph.get("og:title").map(String::as_str), Some("How we audit pages"));

    let report = score_metadata(Some(&record));
    assert_eq!(report.categories[&Category::Title].score, 100);
    assert_eq!(report.categories[&Category::Keywords].score, 100);
    assert_eq!(report.categories[&Category::Image].score, 100);
    assert_eq!(report.categories[&Category::Social].score, 100);
    assert_eq!(report.categories[&Category::Technical].score, 100);
    assert!(report.total_score >= 90);
}

#[tokio::test]
async fn test_server_error_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetch_metadata(&test_context(), &MetadataRequest::new(server.uri()))
        .await
        .unwrap_err();
    assert!(!err.is_validation());
    assert!(err.to_string().starts_with("Failed to fetch or parse metadata:"));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_unreachable_host_is_a_fetch_failure() {
    let err = fetch_metadata(&test_context(), &MetadataRequest::new("http://127.0.0.1:9/"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuditError::Metadata(FetchError::Request { .. })));
}

#[tokio::test]
async fn test_malformed_url_is_a_validation_failure() {
    for bad in ["", "example.com", "ftp://example.com/file", "https://"] {
        let err = fetch_metadata(&test_context(), &MetadataRequest::new(bad))
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{bad:?} should be rejected: {err}");
    }
}
