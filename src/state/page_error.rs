//! Per-page failure kinds
//!
//! A page that fails is dropped from the crawl; none of these abort it.

use crate::knowledge::PageRecord;
use thiserror::Error;

/// Outcome of fetching and extracting one page
pub type PageResult = Result<PageRecord, PageError>;

/// Reasons a page is dropped from the crawl
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Timeout, connection error, or a non-2xx status
    #[error("Transport failure for {url}: {reason}")]
    TransportFailure { url: String, reason: String },

    /// The response is not an HTML document
    #[error("Unsupported content type '{content_type}' for {url}")]
    UnsupportedContentType { url: String, content_type: String },

    /// The body could not be read as markup
    #[error("Failed to parse markup for {url}: {reason}")]
    ParseFailure { url: String, reason: String },
}

impl PageError {
    /// Stable identifier used in crawl metadata and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TransportFailure { .. } => "transport_failure",
            Self::UnsupportedContentType { .. } => "unsupported_content_type",
            Self::ParseFailure { .. } => "parse_failure",
        }
    }

    /// The URL the failure belongs to
    pub fn url(&self) -> &str {
        match self {
            Self::TransportFailure { url, .. }
            | Self::UnsupportedContentType { url, .. }
            | Self::ParseFailure { url, .. } => url,
        }
    }

    /// Returns all failure kind identifiers
    pub fn all_kinds() -> [&'static str; 3] {
        [
            "transport_failure",
            "unsupported_content_type",
            "parse_failure",
        ]
    }
}
