//! API server data structures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::AuditError;
use crate::fetch::AuditContext;

/// Shared state for the API server
#[derive(Clone)]
pub struct ApiState {
    /// Client and fetch policy used by every request
    pub ctx: AuditContext,
}

/// Body of `POST /api/adsense`
#[derive(Debug, Deserialize)]
pub struct AdsenseRequest {
    /// Absolute URL of the homepage
    pub url: String,
}

/// Body of `POST /api/sitemap`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapRequest {
    /// Absolute URL of the site root
    pub site_url: String,
}

/// JSON error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Failure message
    pub error: String,
}

/// An operation failure turned into an HTTP response.
///
/// Validation errors map to `400 Bad Request`, fetch failures to `502 Bad Gateway`.
#[derive(Debug)]
pub struct ApiError(pub AuditError);

impl From<AuditError> for ApiError {
    fn from(error: AuditError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
