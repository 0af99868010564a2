//! Handlers for the audit operations.
//!
//! Each handler runs one operation to completion and returns its result as
//! JSON. No state is kept between requests.

use axum::extract::State;
use axum::Json;

use super::super::types::{AdsenseRequest, ApiError, ApiState, SitemapRequest};
use crate::adsense::{check_adsense, ChecklistReport};
use crate::fetch::{fetch_metadata, MetadataRequest};
use crate::parse::MetadataRecord;
use crate::score::{score_metadata, ScoreReport};
use crate::sitemap::{check_sitemap, CrawlResult};

/// `POST /api/metadata`: fetch a page and extract its metadata
pub async fn metadata_handler(
    State(state): State<ApiState>,
    Json(request): Json<MetadataRequest>,
) -> Result<Json<MetadataRecord>, ApiError> {
    let record = fetch_metadata(&state.ctx, &request).await?;
    Ok(Json(record))
}

/// `POST /api/score`: score a metadata record (`null` yields the empty report)
pub async fn score_handler(Json(record): Json<Option<MetadataRecord>>) -> Json<ScoreReport> {
    Json(score_metadata(record.as_ref()))
}

/// `POST /api/adsense`: run the AdSense checklist against a homepage
pub async fn adsense_handler(
    State(state): State<ApiState>,
    Json(request): Json<AdsenseRequest>,
) -> Result<Json<ChecklistReport>, ApiError> {
    let report = check_adsense(&state.ctx, &request.url).await?;
    Ok(Json(report))
}

/// `POST /api/sitemap`: check sitemap URLs against robots.txt
pub async fn sitemap_handler(
    State(state): State<ApiState>,
    Json(request): Json<SitemapRequest>,
) -> Result<Json<Vec<CrawlResult>>, ApiError> {
    let results = check_sitemap(&state.ctx, &request.site_url).await?;
    Ok(Json(results))
}
