//! Sitelore: a website knowledge-base builder
//!
//! This crate crawls a website inside its apex domain, extracts structured text from
//! every page, enriches the text with keywords, key phrases, summaries and readability
//! scores, and ranks pages against free-text queries.

pub mod config;
pub mod crawler;
pub mod enrich;
pub mod knowledge;
pub mod linguistics;
pub mod output;
pub mod search;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Sitelore operations
#[derive(Debug, Error)]
pub enum SiteLoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Enrichment error: {0}")]
    Enrich(#[from] enrich::EnrichError),

    #[error("Search error: {0}")]
    Search(#[from] search::SearchError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No content was scraped from {url}")]
    NoContent { url: String },

    #[error("Crawl interrupted after {pages} pages")]
    Interrupted { pages: usize },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for Sitelore operations
pub type Result<T> = std::result::Result<T, SiteLoreError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Crawler, HttpFetcher, PageFetcher};
pub use enrich::{EnhancedKnowledgeBase, EnrichedPage, Enricher};
pub use knowledge::{KnowledgeBase, PageRecord};
pub use linguistics::{EnglishResources, LinguisticResources};
pub use search::{search, Corpus, SearchHit};
pub use state::PageError;
pub use url::{apex_domain, extract_domain, normalize_url, DomainScope};
