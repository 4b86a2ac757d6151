//! Console rendering of crawl results

use crate::crawler::CrawlResult;

const UNTITLED: &str = "Untitled";

/// Truncates `text` to at most `max_chars` characters, appending `...` when cut
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Formats every result as a numbered card
///
/// Each card shows the title, the URL and either a text preview of at most
/// `preview_len` characters or the page's error.
pub fn format_summary(results: &[CrawlResult], preview_len: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Crawled {} page(s)\n\n", results.len()));

    for (index, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "[{}] {}\n",
            index,
            result.title.as_deref().unwrap_or(UNTITLED)
        ));
        out.push_str(&format!("    {}\n", result.url));

        if let Some(text) = &result.text {
            out.push_str(&format!("    {}\n", truncate_preview(text, preview_len)));
        }
        if let Some(error) = &result.error {
            out.push_str(&format!("    ! Error: {}\n", error));
        }
        out.push('\n');
    }

    out
}

/// Formats a single result with its full text
pub fn format_detail(result: &CrawlResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        result.title.as_deref().unwrap_or(UNTITLED)
    ));
    out.push_str(&format!("{}\n", result.url));

    if let Some(error) = &result.error {
        out.push_str(&format!("\nError: {}\n", error));
    }
    match &result.text {
        Some(text) => out.push_str(&format!("\n{}\n", text)),
        None => out.push_str("\n(no text extracted)\n"),
    }

    out
}
