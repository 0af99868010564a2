//! AdSense readiness checklist.
//!
//! Fetches a site's homepage and runs eight independent checks against it:
//! HTTPS, indexability, mobile viewport, content length, essential pages,
//! navigation, footer and analytics. The score is the number of passing
//! checks.

mod checks;
mod types;

use crate::app::validate_absolute_url;
use crate::config::{ACCEPT_ANY, ADSENSE_TOTAL_CHECKS};
use crate::error_handling::AuditError;
use crate::fetch::{read_body_with_limit, send_get, AuditContext};

use checks::{Homepage, CHECKS};
pub use types::{CheckStatus, ChecklistReport, ResultItem, SubCheck, Summary};

/// Runs the checklist against already-fetched homepage HTML.
///
/// `url` is the homepage address the HTML was fetched from (the HTTPS check
/// looks at its scheme). Every check runs; none short-circuits another.
pub fn evaluate_homepage(url: &str, html: &str) -> ChecklistReport {
    let page = Homepage::new(url, html);
    let results: Vec<ResultItem> = CHECKS.iter().map(|check| check(&page)).collect();

    let score = results.iter().filter(|item| item.passed()).count();
    log::debug!(
        "AdSense checklist for {}: {}/{} checks passed",
        url,
        score,
        ADSENSE_TOTAL_CHECKS
    );

    ChecklistReport {
        results,
        summary: Some(Summary {
            score,
            total: ADSENSE_TOTAL_CHECKS,
            recommendation: recommendation(score).to_string(),
        }),
        error: None,
    }
}

/// Overall advice for a checklist score.
pub fn recommendation(score: usize) -> &'static str {
    match score {
        7.. => "Excellent! This site shows strong signals for AdSense approval.",
        5..=6 => "Good foundation. Address the warnings and failures to improve your chances.",
        3..=4 => "Several critical issues were found that will likely lead to rejection.",
        _ => "Significant improvements are required.",
    }
}

/// Fetches the homepage at `url` and runs the checklist.
///
/// A fetch failure does not fail the call: it yields a report with `error`
/// set and no results.
///
/// # Errors
///
/// Returns `AuditError::InvalidUrl` if `url` is not an absolute http(s) URL.
pub async fn check_adsense(ctx: &AuditContext, url: &str) -> Result<ChecklistReport, AuditError> {
    // The HTTPS check looks at the address as given, not the normalized one
    let given = url.trim();
    let url = validate_absolute_url(given)?;
    log::info!("Running AdSense checklist for {}", url);

    let response = match send_get(&ctx.client, &url, ACCEPT_ANY, None).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Homepage fetch failed for {}: {}", url, e);
            return Ok(ChecklistReport::failed(e.to_string()));
        }
    };

    let status = response.status();
    if !status.is_success() {
        log::warn!("Homepage fetch for {} returned {}", url, status);
        let reason = status.canonical_reason().unwrap_or(status.as_str());
        return Ok(ChecklistReport::failed(format!(
            "Failed to fetch the main site URL: {reason}"
        )));
    }

    let html = match read_body_with_limit(response, ctx.max_body_bytes).await {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Homepage body read failed for {}: {}", url, e);
            return Ok(ChecklistReport::failed(e.to_string()));
        }
    };

    Ok(evaluate_homepage(given, &html))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_HOMEPAGE: &str = r#"<!DOCTYPE html>
    <html>
    <head>
        <meta name="viewport" content="width=device-width">
        <script async src="https://www.googletagmanager.com/gtag/js?id=G-X"></script>
        <script src="/js/gtag.js"></script>
    </head>
    <body>
        <nav><a href="/">Home</a><a href="/about">About</a><a href="/contact">Contact</a></nav>
        <main>CONTENT</main>
        <footer><a href="/privacy">Privacy</a></footer>
    </body>
    </html>"#;

    fn good_homepage() -> String {
        GOOD_HOMEPAGE.replace("CONTENT", &vec!["lorem"; 800].join(" "))
    }

    #[test]
    fn test_all_checks_pass() {
        let report = evaluate_homepage("https://example.com/", &good_homepage());
        assert_eq!(report.results.len(), 8);
        assert!(report.results.iter().all(ResultItem::passed));
        let summary = report.summary.expect("summary");
        assert_eq!(summary.score, 8);
        assert_eq!(summary.total, 8);
        assert_eq!(
            summary.recommendation,
            "Excellent! This site shows strong signals for AdSense approval."
        );
        assert!(report.error.is_none());
    }

    #[test]
    fn test_checks_are_independent() {
        // Failing HTTPS does not stop the other checks from running
        let report = evaluate_homepage("http://example.com/", &good_homepage());
        assert_eq!(report.results.len(), 8);
        assert_eq!(report.results[0].status, CheckStatus::Fail);
        assert_eq!(report.summary.map(|s| s.score), Some(7));
    }

    #[test]
    fn test_empty_page() {
        let report = evaluate_homepage("http://example.com/", "");
        let titles: Vec<&str> = report.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Uses HTTPS (SSL)",
                "Site is Indexable",
                "Mobile Viewport",
                "Sufficient Content",
                "Essential Pages",
                "Clear Navigation",
                "Complete Site Structure",
                "Traffic Analytics"
            ]
        );
        let summary = report.summary.expect("summary");
        // Only "Site is Indexable" passes
        assert_eq!(summary.score, 1);
        assert_eq!(summary.recommendation, "Significant improvements are required.");
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(
            recommendation(7),
            "Excellent! This site shows strong signals for AdSense approval."
        );
        assert_eq!(
            recommendation(5),
            "Good foundation. Address the warnings and failures to improve your chances."
        );
        assert_eq!(
            recommendation(3),
            "Several critical issues were found that will likely lead to rejection."
        );
        assert_eq!(recommendation(2), "Significant improvements are required.");
    }

    #[test]
    fn test_report_serialization() {
        let report = evaluate_homepage("https://example.com/", &good_homepage());
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["results"][0]["isCritical"], true);
        assert_eq!(json["results"][0]["status"], "pass");
        assert!(json["results"][0].get("subChecks").is_none());
        assert_eq!(json["results"][4]["subChecks"][2]["text"], "Privacy Policy");
        assert!(json.get("error").is_none());

        let failed = serde_json::to_value(ChecklistReport::failed("boom")).expect("serialize");
        assert_eq!(failed["results"], serde_json::json!([]));
        assert_eq!(failed["error"], "boom");
        assert!(failed.get("summary").is_none());
    }
}
