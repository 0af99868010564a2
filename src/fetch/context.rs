//! Shared context for audit operations.
//!
//! This module defines the `AuditContext` struct that groups the resources
//! every operation needs: the HTTP client and the fetch policy taken from
//! [`Config`].

use std::sync::Arc;

use crate::config::Config;

/// Context containing the shared resources needed to run an audit.
///
/// Cheap to clone; the client is shared. Holds no mutable state, so one
/// context can serve any number of concurrent operations.
#[derive(Debug, Clone)]
pub struct AuditContext {
    /// HTTP client for all outbound requests
    pub client: Arc<reqwest::Client>,
    /// User-Agent for metadata fetches that do not supply their own
    pub metadata_user_agent: String,
    /// Metadata fetch timeout used when a request does not supply one
    pub metadata_timeout_ms: u64,
    /// Largest response body read from any fetch
    pub max_body_bytes: usize,
}

impl AuditContext {
    /// Creates a context from a client and the fetch settings in `config`.
    pub fn new(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self {
            client,
            metadata_user_agent: config.metadata_user_agent.clone(),
            metadata_timeout_ms: config.metadata_timeout_ms,
            max_body_bytes: config.max_body_bytes,
        }
    }
}
