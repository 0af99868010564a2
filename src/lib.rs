//! site_audit library: SEO metadata, AdSense readiness and sitemap audits
//!
//! This library fetches a page's HTML and extracts its SEO and social metadata
//! (title, description, Open Graph, Twitter Cards, JSON-LD, ...), scores that
//! metadata against heuristic SEO rules, runs an AdSense readiness checklist
//! against a homepage, and checks sitemap URLs against robots.txt rules.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::initialization::init_client;
//! use site_audit::{fetch_metadata, score_metadata, AuditContext, Config, MetadataRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let ctx = AuditContext::new(init_client(&config)?, &config);
//!
//! let record = fetch_metadata(&ctx, &MetadataRequest::new("https://example.com/")).await?;
//! let report = score_metadata(Some(&record));
//! println!("{}: {}/100", record.url, report.total_score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The fetching operations require a Tokio runtime. Extraction, scoring and
//! checklist evaluation over already-fetched HTML are synchronous.

#![warn(missing_docs)]

pub mod adsense;
pub mod api;
mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod parse;
pub mod score;
pub mod sitemap;
mod utils;

// Re-export public API
pub use adsense::{check_adsense, evaluate_homepage, ChecklistReport};
pub use api::{router, serve_api, start_api_server, ApiState};
pub use app::{validate_absolute_url, validate_timeout_ms};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, AuditError, ErrorType, FetchError, InitializationError,
};
pub use fetch::{fetch_metadata, AuditContext, MetadataRequest};
pub use parse::{extract_metadata, MetadataRecord};
pub use score::{score_metadata, Category, CategoryScore, Importance, ScoreReport};
pub use sitemap::{check_sitemap, CrawlResult};
