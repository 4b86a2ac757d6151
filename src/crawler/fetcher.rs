//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with a proper user agent string and timeouts
//! - GET requests to fetch page content
//! - Error classification
//!
//! Failed fetches are never retried.

use crate::config::Config;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a page could not be fetched
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// No response within the request timeout
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u64 },

    /// Connection could not be established (refused, DNS, TLS)
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-success status
    #[error("request failed with status code {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure
    #[error("{0}")]
    Request(String),
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sumi_gleaner::config::Config;
/// use sumi_gleaner::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_millis(config.crawler.request_timeout_ms))
        .connect_timeout(Duration::from_millis(config.crawler.connect_timeout_ms))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(body)` |
/// | Other status | `FetchError::Status` |
/// | Timeout | `FetchError::Timeout` |
/// | Connection refused / DNS / TLS | `FetchError::Connect` |
/// | Body read failure | `FetchError::Body` |
pub async fn fetch_page(client: &Client, url: &Url, timeout_ms: u64) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify(e, timeout_ms))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout { timeout_ms }
        } else {
            FetchError::Body(e.to_string())
        }
    })
}

/// Classifies a transport error
fn classify(error: reqwest::Error, timeout_ms: u64) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout { timeout_ms }
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Request(error.to_string())
    }
}
