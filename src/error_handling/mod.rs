//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, fetches and audit operations
//! - Categorization of `reqwest` failures
//!
//! Errors fall into four groups:
//! - **Validation**: malformed input, rejected before any network call
//! - **Network**: timeouts, DNS/connect failures, non-2xx status, non-HTML content
//! - **Parse**: malformed HTML, JSON-LD or XML, recovered locally by the evaluators
//! - **Partial data**: missing robots.txt (tolerated) or sitemap.xml (fatal to the sitemap check)

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AuditError, ErrorType, FetchError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_names_are_unique() {
        let names: std::collections::HashSet<&str> =
            ErrorType::iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), ErrorType::iter().count());
    }

    #[test]
    fn test_validation_errors_are_flagged() {
        let invalid = AuditError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert!(invalid.is_validation());
        assert!(AuditError::InvalidInput("timeout".into()).is_validation());
        assert!(!AuditError::Metadata(FetchError::Timeout(5000)).is_validation());
        assert!(!AuditError::SitemapUnavailable(FetchError::Status(
            reqwest::StatusCode::NOT_FOUND
        ))
        .is_validation());
    }

    #[test]
    fn test_error_messages() {
        let err = AuditError::Metadata(FetchError::Status(reqwest::StatusCode::NOT_FOUND));
        assert_eq!(
            err.to_string(),
            "Failed to fetch or parse metadata: Failed to fetch URL: 404 Not Found"
        );

        let err = AuditError::SitemapUnavailable(FetchError::Status(
            reqwest::StatusCode::NOT_FOUND,
        ));
        assert!(err.to_string().starts_with("Could not fetch sitemap.xml"));

        let err = AuditError::Metadata(FetchError::NotHtml("application/json".into()));
        assert!(err
            .to_string()
            .contains("URL does not return HTML content: application/json"));
    }
}
