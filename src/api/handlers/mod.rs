//! API server HTTP handlers.

mod audit;
mod health;

pub use audit::{adsense_handler, metadata_handler, score_handler, sitemap_handler};
pub use health::health_handler;
