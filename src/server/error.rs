use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{GleanError, UrlError};

/// Errors returned by the crawl endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    /// The seed URL was missing or unparseable
    #[error(transparent)]
    BadRequest(#[from] UrlError),

    /// The crawl itself failed, as opposed to any single page
    #[error("Crawling failed: {0}")]
    CrawlFailed(String),
}

impl From<GleanError> for ApiError {
    fn from(err: GleanError) -> Self {
        Self::CrawlFailed(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": e.to_string()
                })),
            )
                .into_response(),
            ApiError::CrawlFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Crawling failed",
                    "details": details
                })),
            )
                .into_response(),
        }
    }
}
