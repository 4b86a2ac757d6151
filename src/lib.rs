//! Sumi-Gleaner: a documentation text gleaner
//!
//! This crate crawls a documentation site from a seed URL, following same-origin
//! links up to a bounded depth, and extracts the readable text of every page it
//! visits with boilerplate (navigation, tables of contents, footers) removed.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod server;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Gleaner operations
#[derive(Debug, Error)]
pub enum GleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Crawl aborted: {0}")]
    CrawlAborted(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
///
/// `Missing` and `Invalid` are the seed rejections reported to callers of the
/// crawl entry points; their messages are part of the public response format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL provided")]
    Invalid,

    #[error("Failed to parse URL: {0}")]
    Parse(String),
}

/// Errors raised while querying a parsed document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
}

/// Result type alias for Sumi-Gleaner operations
pub type Result<T> = std::result::Result<T, GleanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlResult, Crawler};
pub use extract::{extract, ExtractedContent};
pub use state::{PageState, SkipReason};
pub use crate::url::{parse_seed, strip_fragment};
