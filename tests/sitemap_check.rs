//! Sitemap crawlability against mock sites.

mod helpers;

use helpers::{test_context, text, xml};
use site_audit::{check_sitemap, AuditError, CrawlResult, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sitemap(urls: &[String]) -> String {
    let entries: String = urls
        .iter()
        .map(|u| format!("<url><loc>{u}</loc></url>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{entries}</urlset>"#
    )
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_disallowed_prefix_is_not_crawlable() {
    let server = MockServer::start().await;
    let site = server.uri();
    mount(
        &server,
        "/robots.txt",
        text("User-agent: *\nDisallow: /private\n\nUser-agent: Googlebot\nDisallow: /public\n"),
    )
    .await;
    let urls = vec![
        format!("{site}/"),
        format!("{site}/private/page"),
        format!("{site}/public"),
        format!("{site}/private/page"),
    ];
    mount(&server, "/sitemap.xml", xml(&sitemap(&urls))).await;

    let results = check_sitemap(&test_context(), &site).await.expect("sitemap");
    assert_eq!(
        results,
        vec![
            CrawlResult { url: urls[0].clone(), crawlable: true },
            CrawlResult { url: urls[1].clone(), crawlable: false },
            CrawlResult { url: urls[2].clone(), crawlable: true },
            CrawlResult { url: urls[3].clone(), crawlable: false },
        ]
    );
}

#[tokio::test]
async fn test_root_rule_blocks_everything() {
    let server = MockServer::start().await;
    let site = server.uri();
    mount(&server, "/robots.txt", text("User-agent: *\nDisallow: /\n")).await;
    let urls = vec![format!("{site}/"), format!("{site}/a"), format!("{site}/b/c")];
    mount(&server, "/sitemap.xml", xml(&sitemap(&urls))).await;

    let results = check_sitemap(&test_context(), &site).await.expect("sitemap");
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| !r.crawlable));
}

#[tokio::test]
async fn test_missing_robots_means_no_rules() {
    let server = MockServer::start().await;
    let site = server.uri();
    mount(&server, "/robots.txt", ResponseTemplate::new(404)).await;
    let urls = vec![format!("{site}/private")];
    mount(&server, "/sitemap.xml", xml(&sitemap(&urls))).await;

    let results = check_sitemap(&test_context(), &site).await.expect("sitemap");
    assert_eq!(results, vec![CrawlResult { url: urls[0].clone(), crawlable: true }]);
}

#[tokio::test]
async fn test_missing_sitemap_is_an_error() {
    let server = MockServer::start().await;
    mount(&server, "/robots.txt", text("User-agent: *\nDisallow:\n")).await;
    mount(&server, "/sitemap.xml", ResponseTemplate::new(404)).await;

    let err = check_sitemap(&test_context(), &server.uri())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AuditError::SitemapUnavailable(FetchError::Status(status)) if status.as_u16() == 404
    ));
    assert!(err.to_string().starts_with("Could not fetch sitemap.xml"));
}

#[tokio::test]
async fn test_files_are_read_from_site_root() {
    let server = MockServer::start().await;
    let site = server.uri();
    mount(&server, "/robots.txt", text("User-agent: *\nDisallow: /post\n")).await;
    let urls = vec![format!("{site}/blog/post"), format!("{site}/other/post")];
    mount(&server, "/sitemap.xml", xml(&sitemap(&urls))).await;

    // The site URL carries a path; robots.txt and sitemap.xml still come from the root
    let results = check_sitemap(&test_context(), &format!("{site}/blog/"))
        .await
        .expect("sitemap");
    assert_eq!(results.len(), 2);
    // Paths are taken relative to the given site URL: "/post" for the first entry,
    // the whole URL for the second, which lies outside it
    assert!(!results[0].crawlable);
    assert!(results[1].crawlable);
}
