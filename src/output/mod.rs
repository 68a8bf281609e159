//! Output module for reports and console summaries
//!
//! This module handles:
//! - Rendering the plain-text knowledge-base report
//! - Printing crawl and enrichment summaries
//! - Printing ranked search results

mod console;
mod report;

pub use console::{
    print_crawl_summary, print_enrichment_statistics, print_search_results, write_crawl_summary,
    write_enrichment_statistics, write_search_results,
};
pub use report::{format_text_report, preview, write_text_report};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
