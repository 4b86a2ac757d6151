use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::crawler::{run_crawl, CrawlResult};
use crate::server::{error::ApiError, AppState};
use crate::url::{parse_seed, strip_fragment};

/// Query string of the crawl endpoint
#[derive(Debug, Deserialize)]
pub struct CrawlQuery {
    pub url: Option<String>,
}

/// GET /api?url=... - Crawl a documentation site
///
/// Responds with every crawled page, successful or not. Only a missing or
/// invalid seed (400) or a crawl that could not complete (500) is an error.
pub async fn get_crawl(
    State(state): State<AppState>,
    Query(query): Query<CrawlQuery>,
) -> Result<Json<Vec<CrawlResult>>, ApiError> {
    let seed = strip_fragment(parse_seed(query.url.as_deref())?);

    tracing::debug!("Crawl requested for {}", seed);
    match run_crawl(state.crawler.clone(), seed.to_string()).await {
        Ok(results) => Ok(Json(results)),
        Err(e) => {
            tracing::error!("Crawling failed for {}: {}", seed, e);
            Err(e.into())
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
