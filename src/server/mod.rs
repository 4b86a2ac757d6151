//! HTTP endpoint exposing the crawler
//!
//! - `GET /api?url=<seed>` (also `/api/crawl`) runs a crawl and returns the
//!   result list as JSON
//! - `GET /health` reports liveness

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{get_crawl, health_check, CrawlQuery};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::crawler::Crawler;
use crate::GleanError;

/// Shared state of the endpoint
#[derive(Debug, Clone)]
pub struct AppState {
    pub crawler: Arc<Crawler>,
}

impl AppState {
    pub fn new(crawler: Crawler) -> Self {
        Self {
            crawler: Arc::new(crawler),
        }
    }
}

//
// Router
//

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api", get(get_crawl))
        .route("/api/crawl", get(get_crawl))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the endpoint on the configured bind address until the process exits
pub async fn serve(config: &Config) -> Result<(), GleanError> {
    let state = AppState::new(Crawler::new(config)?);

    let listener = tokio::net::TcpListener::bind(config.server.bind_address.as_str()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
