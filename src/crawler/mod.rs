//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The page-fetching capability and its HTTP implementation
//! - Content extraction from HTML into page records
//! - The FIFO frontier and politeness delay
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;

pub use coordinator::Crawler;
pub use extractor::{clean_text, extract};
pub use fetcher::{
    build_http_client, declared_charset, is_html_content_type, FetchedPage, HttpFetcher,
    PageFetcher,
};
pub use frontier::Frontier;

use crate::config::{validate, Config};
use crate::knowledge::KnowledgeBase;
use crate::SiteLoreError;
use std::time::Duration;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration and build the HTTP client
///    from the user-agent settings
/// 2. Seed the frontier with `seed`
/// 3. Fetch, extract and follow same-domain links
/// 4. Return the assembled knowledge base
///
/// # Example
///
/// ```no_run
/// use sitelore::config::Config;
/// use sitelore::crawler::crawl;
///
/// # async fn example() -> Result<(), sitelore::SiteLoreError> {
/// let kb = crawl(&Config::default(), "https://example.com/").await?;
/// println!("{} pages", kb.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seed: &str) -> Result<KnowledgeBase, SiteLoreError> {
    validate(config)?;
    let fetcher = HttpFetcher::new(
        &config.user_agent,
        Duration::from_secs(config.crawler.request_timeout_secs),
    )?;
    Crawler::from_config(fetcher, &config.crawler)
        .crawl(seed)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_crawl_rejects_infinite_delay() {
        let mut config = Config::default();
        config.crawler.delay_seconds = f64::INFINITY;

        let result = crawl(&config, "https://example.com/").await;
        assert!(matches!(result, Err(SiteLoreError::Config(_))));
    }
}
