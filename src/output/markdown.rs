//! Markdown report generation
//!
//! This module renders a finished crawl as a markdown document: run
//! information, overall statistics, a table of every page and the full text
//! of each page that yielded any.

use crate::crawler::CrawlResult;
use crate::output::stats::CrawlStatistics;
use crate::output::summary::truncate_preview;
use crate::GleanError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Longest error shown in the page table
const TABLE_ERROR_CHARS: usize = 80;

/// A finished crawl together with the metadata shown in its report
#[derive(Debug, Clone)]
pub struct CrawlReport<'a> {
    /// The seed URL the crawl started from
    pub seed: String,

    /// RFC 3339 timestamp of report generation
    pub generated_at: String,

    /// Hash of the configuration file, if one was used
    pub config_hash: Option<String>,

    /// Crawl duration in milliseconds
    pub duration_ms: Option<u64>,

    pub results: &'a [CrawlResult],
}

impl<'a> CrawlReport<'a> {
    /// Creates a report stamped with the current time
    pub fn new(seed: impl Into<String>, results: &'a [CrawlResult]) -> Self {
        Self {
            seed: seed.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            config_hash: None,
            duration_ms: None,
            results,
        }
    }
}

/// Writes a markdown report to `output_path`
///
/// # Arguments
///
/// * `report` - The crawl to report on
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(GleanError)` - Failed to write the report
pub fn generate_markdown_report(
    report: &CrawlReport<'_>,
    output_path: &Path,
) -> Result<(), GleanError> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_report(report: &CrawlReport<'_>) -> String {
    let stats = CrawlStatistics::from_results(report.results);
    let mut md = String::new();

    // Title
    md.push_str("# Sumi-Gleaner Crawl Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", report.seed));
    md.push_str(&format!("- **Generated**: {}\n", report.generated_at));
    if let Some(duration) = report.duration_ms {
        md.push_str(&format!(
            "- **Duration**: {} ms ({:.2} seconds)\n",
            duration,
            duration as f64 / 1000.0
        ));
    }
    if let Some(hash) = &report.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Total Pages**: {}\n", stats.total_pages));
    md.push_str(&format!("- **Pages With Text**: {}\n", stats.pages_with_text));
    md.push_str(&format!("- **Total Errors**: {}\n", stats.pages_with_errors));
    md.push_str(&format!(
        "- **Characters Extracted**: {}\n",
        stats.total_characters
    ));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n\n",
        stats.success_rate()
    ));

    if stats.pages_with_errors > 0 {
        md.push_str("## Error Summary\n\n");
        md.push_str("| Error Type | Count |\n");
        md.push_str("|------------|-------|\n");
        md.push_str(&format!("| Fetch Failed | {} |\n", stats.fetch_failures));
        md.push_str(&format!("| Parse Failed | {} |\n", stats.parse_failures));
        md.push_str(&format!("| Invalid URL | {} |\n\n", stats.invalid_urls));
    }

    // Page table
    if !report.results.is_empty() {
        md.push_str("## Pages\n\n");
        md.push_str("| # | Title | URL | Status |\n");
        md.push_str("|---|-------|-----|--------|\n");

        for (index, result) in report.results.iter().enumerate() {
            let status = match &result.error {
                Some(error) => escape_cell(&truncate_preview(error, TABLE_ERROR_CHARS)),
                None => "ok".to_string(),
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                index,
                escape_cell(result.title.as_deref().unwrap_or("Untitled")),
                result.url,
                status
            ));
        }
        md.push('\n');
    }

    // Page contents
    for result in report.results.iter().filter(|r| r.text.is_some()) {
        md.push_str(&format!(
            "## {}\n\n",
            result.title.as_deref().unwrap_or("Untitled")
        ));
        md.push_str(&format!("<{}>\n\n", result.url));
        if let Some(text) = &result.text {
            md.push_str(text);
            md.push_str("\n\n");
        }
    }

    md
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
