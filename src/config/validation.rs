use crate::config::types::{Config, CrawlerConfig, OutputConfig, ServerConfig, UserAgentConfig};
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Deepest crawl a configuration may request
const MAX_CONFIGURABLE_DEPTH: u32 = 10;

/// Accepted range for request and connect timeouts (milliseconds)
const TIMEOUT_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=120_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_server_config(&config.server)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_depth > MAX_CONFIGURABLE_DEPTH {
        return Err(ConfigError::Validation(format!(
            "max_depth must be <= {}, got {}",
            MAX_CONFIGURABLE_DEPTH, config.max_depth
        )));
    }

    if !TIMEOUT_RANGE_MS.contains(&config.request_timeout_ms) {
        return Err(ConfigError::Validation(format!(
            "request_timeout_ms must be between {} and {}, got {}ms",
            TIMEOUT_RANGE_MS.start(),
            TIMEOUT_RANGE_MS.end(),
            config.request_timeout_ms
        )));
    }

    if !TIMEOUT_RANGE_MS.contains(&config.connect_timeout_ms) {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_ms must be between {} and {}, got {}ms",
            TIMEOUT_RANGE_MS.start(),
            TIMEOUT_RANGE_MS.end(),
            config.connect_timeout_ms
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address '{}' is not a socket address: {}",
            config.bind_address, e
        ))
    })?;
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.preview_length == 0 {
        return Err(ConfigError::Validation(
            "preview_length must be >= 1".to_string(),
        ));
    }
    Ok(())
}
