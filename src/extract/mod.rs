//! Content extraction for documentation pages
//!
//! Given the HTML of a page, the extractor returns the page title and a single
//! blob of readable text:
//!
//! 1. `script` and `style` content never reaches the output
//! 2. The title comes from the first `<title>` element
//! 3. The content region is chosen from `CONTENT_TIERS`, falling back to `<body>`
//! 4. Boilerplate inside the region (tables of contents, pagination, edit
//!    links, footers, heading anchors) or page chrome around the body is left out
//! 5. Remaining text is concatenated and its whitespace collapsed
//!
//! Malformed HTML is never an error: it degrades to partial or empty output.

mod boilerplate;
mod region;
mod text;

pub use boilerplate::{body_chrome, region_boilerplate};
pub use region::{locate_region, match_tier, ContentRegion, ContentTier, CONTENT_TIERS};
pub use text::{collapse_whitespace, collect_text};

pub(crate) use region::compile as compile_selector;

use crate::ExtractError;
use scraper::Html;
use serde::Serialize;

/// Title and text extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedContent {
    /// Trimmed `<title>` text, `None` when empty
    pub title: Option<String>,

    /// Cleaned page text, `None` when nothing remained
    pub text: Option<String>,
}

/// Extracts the title and readable text from raw HTML
///
/// `page_url` is only used to label log messages.
///
/// # Example
///
/// ```
/// use sumi_gleaner::extract;
///
/// let html = "<html><head><title> Home </title></head><body><p>Hello</p></body></html>";
/// let content = extract(html, "https://docs.example.com/").unwrap();
/// assert_eq!(content.title.as_deref(), Some("Home"));
/// assert_eq!(content.text.as_deref(), Some("Hello"));
/// ```
pub fn extract(html: &str, page_url: &str) -> Result<ExtractedContent, ExtractError> {
    let document = Html::parse_document(html);
    extract_document(&document, page_url)
}

/// Extracts the title and readable text from an already parsed document
pub fn extract_document(document: &Html, page_url: &str) -> Result<ExtractedContent, ExtractError> {
    let title = extract_title(document)?;

    let raw_text = match locate_region(document)? {
        Some(ContentRegion::Tier { tier, element }) => {
            tracing::debug!("Using {} content selector for {}", tier.name, page_url);
            let stripped = region_boilerplate(element)?;
            collect_text(element, &stripped)
        }
        Some(ContentRegion::Body(body)) => {
            tracing::warn!(
                "Could not find a content region for {}, falling back to body extraction",
                page_url
            );
            let stripped = body_chrome(body)?;
            collect_text(body, &stripped)
        }
        None => String::new(),
    };

    Ok(ExtractedContent {
        title,
        text: non_empty(collapse_whitespace(&raw_text)),
    })
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Result<Option<String>, ExtractError> {
    let title_selector = region::compile("title")?;

    Ok(document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .and_then(non_empty))
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
