use crate::extract::ExtractedContent;
use serde::{Deserialize, Serialize};

/// One entry per visited URL in a crawl run
///
/// A page either carries extracted `text` or an `error`; a page whose
/// discovery step failed after extraction carries both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Absolute, fragment-free URL; unique within a run
    pub url: String,

    /// Trimmed page title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Cleaned page text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Human-readable failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CrawlResult {
    /// A page whose content was extracted
    pub fn page(url: impl Into<String>, content: ExtractedContent) -> Self {
        Self {
            url: url.into(),
            title: content.title,
            text: content.text,
            error: None,
        }
    }

    /// A URL that produced only an error
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Returns true if this entry carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
