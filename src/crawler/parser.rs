//! HTML processing for a fetched page
//!
//! This module parses a page once and derives everything the crawler needs
//! from it:
//! - The extracted title and text
//! - Links to follow (from every `<a href>`)
//!
//! The parsed document never leaves this module, so nothing that is not `Send`
//! is held across an `.await` by the crawler.

use crate::extract::{extract_document, ExtractedContent};
use crate::url::resolve_href;
use crate::ExtractError;
use scraper::Html;
use url::Url;

/// Everything derived from one fetched page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Extracted title and text
    pub content: Result<ExtractedContent, ExtractError>,

    /// Absolute, fragment-free link targets in document order
    pub links: Result<Vec<Url>, ExtractError>,
}

/// Parses a page, extracts its content, and optionally discovers its links
///
/// A failure in one step does not prevent the other from running.
///
/// # Example
///
/// ```
/// use sumi_gleaner::crawler::parse_page;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let page_url = Url::parse("https://docs.example.com/").unwrap();
/// let parsed = parse_page(html, &page_url, true);
/// assert_eq!(parsed.content.unwrap().title, Some("Test".to_string()));
/// assert_eq!(parsed.links.unwrap()[0].as_str(), "https://docs.example.com/page");
/// ```
pub fn parse_page(html: &str, page_url: &Url, follow_links: bool) -> ParsedPage {
    let document = Html::parse_document(html);

    let content = extract_document(&document, page_url.as_str());
    let links = if follow_links {
        discover_links(&document, page_url)
    } else {
        Ok(Vec::new())
    };

    ParsedPage { content, links }
}

/// Extracts the target of every anchor in the document
///
/// Each non-empty `href` is resolved against `page_url` and stripped of its
/// fragment. Hrefs that cannot be resolved are logged and skipped. No origin
/// or scheme filtering happens here.
pub fn discover_links(document: &Html, page_url: &Url) -> Result<Vec<Url>, ExtractError> {
    let anchor = crate::extract::compile_selector("a")?;

    let links = document
        .select(&anchor)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .filter_map(|href| match resolve_href(href, page_url) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring invalid link href on page {}: {}", page_url, e);
                None
            }
        })
        .collect();

    Ok(links)
}
