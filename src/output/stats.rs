//! Statistics over a crawl's results
//!
//! This module provides functionality for summarizing a result list and
//! displaying the summary.

use crate::crawler::{CrawlResult, FETCH_FAILED_PREFIX, INVALID_URL, PARSE_FAILED_PREFIX};

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Total number of results
    pub total_pages: usize,

    /// Results carrying extracted text
    pub pages_with_text: usize,

    /// Results carrying an error
    pub pages_with_errors: usize,

    /// Pages that could not be fetched
    pub fetch_failures: usize,

    /// Pages whose content or links could not be processed
    pub parse_failures: usize,

    /// URLs that could not be parsed
    pub invalid_urls: usize,

    /// Characters of extracted text across all pages
    pub total_characters: usize,
}

impl CrawlStatistics {
    /// Computes statistics for a result list
    pub fn from_results(results: &[CrawlResult]) -> Self {
        let mut stats = Self {
            total_pages: results.len(),
            ..Default::default()
        };

        for result in results {
            if let Some(text) = &result.text {
                stats.pages_with_text += 1;
                stats.total_characters += text.chars().count();
            }

            if let Some(error) = &result.error {
                stats.pages_with_errors += 1;
                if error.starts_with(FETCH_FAILED_PREFIX) {
                    stats.fetch_failures += 1;
                } else if error.starts_with(PARSE_FAILED_PREFIX) {
                    stats.parse_failures += 1;
                } else if error == INVALID_URL {
                    stats.invalid_urls += 1;
                }
            }
        }

        stats
    }

    /// Percentage of results without an error
    pub fn success_rate(&self) -> f64 {
        if self.total_pages == 0 {
            0.0
        } else {
            (self.total_pages - self.pages_with_errors) as f64 / self.total_pages as f64 * 100.0
        }
    }
}

/// Formats statistics as a plain-text block
pub fn format_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();

    out.push_str("=== Crawl Statistics ===\n\n");

    out.push_str("Overview:\n");
    out.push_str(&format!("  Pages crawled: {}\n", stats.total_pages));
    out.push_str(&format!("  Pages with text: {}\n", stats.pages_with_text));
    out.push_str(&format!(
        "  Characters extracted: {}\n\n",
        stats.total_characters
    ));

    if stats.pages_with_errors > 0 {
        out.push_str("Error Summary:\n");
        out.push_str(&format!("  Fetch failures: {}\n", stats.fetch_failures));
        out.push_str(&format!("  Parse failures: {}\n", stats.parse_failures));
        out.push_str(&format!("  Invalid URLs: {}\n\n", stats.invalid_urls));
    }

    out.push_str(&format!(
        "Success Rate: {:.1}% ({} / {} pages without errors)\n",
        stats.success_rate(),
        stats.total_pages - stats.pages_with_errors,
        stats.total_pages
    ));

    out
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    print!("{}", format_statistics(stats));
}
