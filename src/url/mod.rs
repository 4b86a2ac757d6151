//! URL handling module for Sumi-Gleaner
//!
//! This module provides seed validation, fragment stripping, relative link
//! resolution, and origin comparison.

mod normalize;
mod origin;

use crate::UrlError;
use url::Url;

// Re-export main functions
pub use normalize::{resolve_href, strip_fragment};
pub use origin::{is_same_origin, origin_of};

/// Validates a seed URL as received from a caller
///
/// This is the check every crawl entry point runs before any crawling begins.
///
/// # Returns
///
/// * `Ok(Url)` - The parsed absolute URL
/// * `Err(UrlError::Missing)` - No URL, or an empty one, was supplied
/// * `Err(UrlError::Invalid)` - The value is not an absolute URL
///
/// # Examples
///
/// ```
/// use sumi_gleaner::url::parse_seed;
/// use sumi_gleaner::UrlError;
///
/// assert!(parse_seed(Some("https://docs.example.com/")).is_ok());
/// assert_eq!(parse_seed(None).unwrap_err(), UrlError::Missing);
/// assert_eq!(parse_seed(Some("not a url")).unwrap_err(), UrlError::Invalid);
/// ```
pub fn parse_seed(raw: Option<&str>) -> Result<Url, UrlError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(UrlError::Missing),
    };

    Url::parse(raw).map_err(|_| UrlError::Invalid)
}
