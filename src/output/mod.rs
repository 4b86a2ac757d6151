//! Output module for presenting crawl results
//!
//! This module handles:
//! - Console summaries and single-page detail views
//! - Crawl statistics
//! - Markdown reports

mod markdown;
pub mod stats;
mod summary;

pub use markdown::{format_markdown_report, generate_markdown_report, CrawlReport};
pub use stats::{format_statistics, print_statistics, CrawlStatistics};
pub use summary::{format_detail, format_summary, truncate_preview};
