//! Liveness handler.

/// Plain-text liveness probe
pub async fn health_handler() -> &'static str {
    "ok"
}
