//! JSON API server for the audit operations.
//!
//! Provides these endpoints:
//! - `POST /api/metadata` - fetch a page and extract its metadata
//! - `POST /api/score` - score a metadata record
//! - `POST /api/adsense` - AdSense readiness checklist
//! - `POST /api/sitemap` - sitemap crawlability against robots.txt
//! - `GET /health` - liveness probe

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{adsense_handler, health_handler, metadata_handler, score_handler, sitemap_handler};
pub use types::{ApiError, ApiState};

/// Builds the API router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/metadata", post(metadata_handler))
        .route("/api/score", post(score_handler))
        .route("/api/adsense", post(adsense_handler))
        .route("/api/sitemap", post(sitemap_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Serves the API on an already-bound listener until the server fails.
pub async fn serve_api(listener: TcpListener, state: ApiState) -> Result<(), anyhow::Error> {
    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;
    Ok(())
}

/// Binds `host:port` and serves the API.
pub async fn start_api_server(host: &str, port: u16, state: ApiState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}:{}: {}", host, port, e))?;

    log::info!("API server listening on http://{}:{}/", host, port);
    log::info!("  - Metadata: POST http://{}:{}/api/metadata", host, port);
    log::info!("  - Score: POST http://{}:{}/api/score", host, port);
    log::info!("  - AdSense: POST http://{}:{}/api/adsense", host, port);
    log::info!("  - Sitemap: POST http://{}:{}/api/sitemap", host, port);

    serve_api(listener, state).await
}
