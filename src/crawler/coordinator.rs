//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that:
//! - Seeds the frontier and derives the apex-domain scope
//! - Fetches one page at a time and runs the extractor over it
//! - Enqueues newly discovered same-domain links
//! - Throttles between fetch attempts
//! - Stops on an exhausted frontier, the page cap, or shutdown
//! - Assembles the resulting knowledge base

use crate::config::CrawlerConfig;
use crate::crawler::extractor::extract;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::frontier::Frontier;
use crate::knowledge::{CrawlMetadata, KnowledgeBase};
use crate::state::{CrawlTally, PageError, PageResult};
use crate::url::{extract_domain, normalize_url, DomainScope};
use crate::{SiteLoreError, UrlError};
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Domain-bounded crawler driving a [`PageFetcher`]
pub struct Crawler<F> {
    fetcher: F,
    max_pages: usize,
    delay: Duration,
    config_hash: Option<String>,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a crawler recording at most `max_pages` pages
    pub fn new(fetcher: F, max_pages: usize, delay: Duration) -> Self {
        Self {
            fetcher,
            max_pages,
            delay,
            config_hash: None,
        }
    }

    /// Creates a crawler from the `[crawler]` configuration table
    ///
    /// A delay that is negative or not representable as a `Duration` disables
    /// throttling; `config::validate` rejects such values up front.
    pub fn from_config(fetcher: F, config: &CrawlerConfig) -> Self {
        let delay = Duration::try_from_secs_f64(config.delay_seconds).unwrap_or_else(|_| {
            tracing::warn!(
                "Ignoring unusable delay of {} seconds",
                config.delay_seconds
            );
            Duration::ZERO
        });
        Self::new(fetcher, config.max_pages, delay)
    }

    /// Records the configuration hash in the crawl metadata
    pub fn with_config_hash(mut self, hash: impl Into<String>) -> Self {
        self.config_hash = Some(hash.into());
        self
    }

    /// Crawls from `seed` until the frontier is exhausted or the page cap is hit
    pub async fn crawl(&self, seed: &str) -> Result<KnowledgeBase, SiteLoreError> {
        self.crawl_until(seed, std::future::pending()).await
    }

    /// Crawls like [`Crawler::crawl`], stopping early when `shutdown` completes
    ///
    /// On shutdown the pages gathered so far are returned with
    /// `metadata.interrupted` set, so the caller can checkpoint them.
    pub async fn crawl_until<S>(
        &self,
        seed: &str,
        shutdown: S,
    ) -> Result<KnowledgeBase, SiteLoreError>
    where
        S: Future<Output = ()>,
    {
        let seed_url = normalize_url(seed)?;
        let scope = DomainScope::from_seed(&seed_url)?;
        let domain = extract_domain(&seed_url).ok_or(UrlError::MissingDomain)?;

        tracing::info!("Starting crawl of {}", seed_url);
        tracing::info!("Domain: {} (scope: {})", domain, scope.apex());
        tracing::info!("Max pages: {}", self.max_pages);

        let mut frontier = Frontier::new(seed_url.clone(), self.delay);
        let mut tally = CrawlTally::new();
        let mut pages = Vec::new();
        let mut interrupted = false;

        tokio::pin!(shutdown);

        while pages.len() < self.max_pages {
            let Some(url) = frontier.next_url() else {
                tracing::debug!("Frontier is empty");
                break;
            };

            tracing::info!("Scraping: {}", url);

            let result = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    interrupted = true;
                    break;
                }
                result = self.fetch_page(&url, &scope) => result,
            };

            match result {
                Ok(page) => {
                    tally.record_success();
                    let discovered = page.links.iter().filter_map(|l| Url::parse(l).ok());
                    let added = frontier.enqueue_all(discovered);
                    tracing::debug!(
                        "{}: {} words, {} new links ({} pending)",
                        url,
                        page.word_count,
                        added,
                        frontier.pending_count()
                    );
                    pages.push(page);
                }
                Err(error) => {
                    tracing::warn!(kind = error.kind(), "Skipping page: {}", error);
                    tally.record_failure(&error);
                }
            }

            if pages.len() >= self.max_pages || frontier.is_empty() {
                break;
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    interrupted = true;
                    break;
                }
                _ = frontier.wait_politely() => {}
            }
        }

        if interrupted {
            tracing::warn!(
                "Crawl interrupted; keeping {} pages gathered so far",
                pages.len()
            );
        }

        let metadata = CrawlMetadata {
            total_pages: pages.len(),
            visited_urls: frontier.visited_count(),
            max_pages_limit: self.max_pages,
            delay_between_requests: self.delay.as_secs_f64(),
            failures: tally.failures.clone(),
            interrupted,
            config_hash: self.config_hash.clone(),
        };

        let kb = KnowledgeBase::assemble(seed_url.as_str(), domain, pages, metadata);

        tracing::info!(
            "Crawl completed. Scraped {} pages with {} total words ({} attempts, {} dropped).",
            kb.len(),
            kb.total_word_count,
            tally.attempted,
            tally.failed()
        );

        Ok(kb)
    }

    /// Fetches one URL and extracts its record
    ///
    /// Non-HTML responses and binary bodies come back as explicit
    /// [`PageError`] values rather than aborting the crawl.
    pub async fn fetch_page(&self, url: &Url, scope: &DomainScope) -> PageResult {
        let fetched = self.fetcher.fetch(url).await?;

        if fetched.final_url != url.as_str() {
            tracing::debug!("{} redirected to {}", url, fetched.final_url);
        }
        tracing::trace!(
            "{}: HTTP {} ({} bytes, {})",
            url,
            fetched.status,
            fetched.body.len(),
            fetched.content_type
        );

        if !fetched.is_html() {
            return Err(PageError::UnsupportedContentType {
                url: url.to_string(),
                content_type: fetched.content_type,
            });
        }

        let markup = fetched.into_markup(url)?;
        Ok(extract(&markup, url, scope))
    }
}
