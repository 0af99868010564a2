//! Input validation shared by the CLI and the API server.

pub mod url;

// Re-export public API
pub use url::{validate_absolute_url, validate_timeout_ms};
