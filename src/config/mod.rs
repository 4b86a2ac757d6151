//! Configuration module for Sumi-Gleaner
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: `Config::default()` describes a crawl of at
//! most two hops with a five second request timeout.
//!
//! # Example
//!
//! ```no_run
//! use sumi_gleaner::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gleaner.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, ServerConfig, UserAgentConfig,
    DEFAULT_REQUEST_TIMEOUT_MS, MAX_DEPTH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
