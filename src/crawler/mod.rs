//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with per-request timeouts
//! - HTML parsing, content extraction and link discovery
//! - Visited-set deduplication shared across concurrent branches
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod result;
mod visited;

pub use coordinator::{
    run_crawl, Crawler, FETCH_FAILED_PREFIX, INVALID_URL, PARSE_FAILED_PREFIX,
};
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use parser::{discover_links, parse_page, ParsedPage};
pub use result::CrawlResult;
pub use visited::VisitedSet;

use crate::config::Config;
use crate::GleanError;

/// Runs a complete crawl operation
///
/// This is the main entry point for a one-off crawl. It will:
/// 1. Build the HTTP client
/// 2. Fetch the seed page and extract its content
/// 3. Follow same-origin links up to the configured depth
/// 4. Return every page's result, errors included
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed` - The absolute URL to start from
///
/// # Returns
///
/// * `Ok(Vec<CrawlResult>)` - Crawl completed
/// * `Err(GleanError)` - The crawl could not be started or was aborted
pub async fn crawl(config: &Config, seed: &str) -> Result<Vec<CrawlResult>, GleanError> {
    let crawler = Crawler::new(config)?;
    Ok(crawler.crawl(seed).await)
}
