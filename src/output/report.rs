//! Plain-text knowledge-base report
//!
//! This module renders a human-readable report of a crawl: a header with the
//! crawl totals, then one section per page with its headings and a content
//! preview.

use crate::knowledge::{KnowledgeBase, PageRecord};
use crate::output::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Writes the text report for `kb` to `output_path`
///
/// # Arguments
///
/// * `kb` - The knowledge base to describe
/// * `output_path` - Path where the report should be written
/// * `preview_chars` - Maximum characters of page text shown per page
pub fn write_text_report(
    kb: &KnowledgeBase,
    output_path: &Path,
    preview_chars: usize,
) -> OutputResult<()> {
    let report = format_text_report(kb, preview_chars);

    let mut file = File::create(output_path)?;
    file.write_all(report.as_bytes())?;

    Ok(())
}

/// Formats a knowledge base as a plain-text report
pub fn format_text_report(kb: &KnowledgeBase, preview_chars: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Knowledge Base for {}\n", kb.seed_url));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");
    out.push_str(&format!("Domain: {}\n", kb.domain));
    out.push_str(&format!("Total Pages: {}\n", kb.pages.len()));
    out.push_str(&format!("Total Words: {}\n", kb.total_word_count));
    out.push_str(&format!("Created: {}\n", kb.created_at.to_rfc3339()));
    if kb.metadata.interrupted {
        out.push_str("Status: interrupted (partial crawl)\n");
    }
    out.push('\n');

    for (i, page) in kb.pages.iter().enumerate() {
        format_page(&mut out, i + 1, page, preview_chars);
    }

    out
}

fn format_page(out: &mut String, number: usize, page: &PageRecord, preview_chars: usize) {
    out.push_str(&format!("Page {}: {}\n", number, page.title));
    out.push_str(&format!("URL: {}\n", page.url));
    out.push_str(&format!("Words: {}\n", page.word_count));

    if !page.headings.is_empty() {
        out.push_str("Headings:\n");
        for heading in &page.headings {
            out.push_str(&format!("  • {}\n", heading));
        }
    }

    out.push_str("\nContent Preview:\n");
    out.push_str(&preview(&page.text_content, preview_chars));
    out.push_str("\n\n");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push_str("\n\n");
}

/// Truncates `text` to `max_chars` characters, appending "..." when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
