use crate::knowledge::page::PageRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything one crawl produced
///
/// `pages` is in crawl completion order and `total_word_count` is always the sum
/// of the pages' word counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    #[serde(rename = "websiteUrl")]
    pub seed_url: String,
    pub domain: String,
    #[serde(rename = "scrapedPages")]
    pub pages: Vec<PageRecord>,
    pub total_word_count: usize,
    pub created_at: DateTime<Utc>,
    pub metadata: CrawlMetadata,
}

/// Limits and counters recorded alongside the pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlMetadata {
    pub total_pages: usize,
    pub visited_urls: usize,
    pub max_pages_limit: usize,
    pub delay_between_requests: f64,
    /// Dropped pages per error kind
    #[serde(default)]
    pub failures: BTreeMap<String, usize>,
    /// True when the crawl was cancelled and this is a checkpoint
    #[serde(default)]
    pub interrupted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
}

impl KnowledgeBase {
    /// Assembles a knowledge base, computing the word total from the pages
    pub fn assemble(
        seed_url: impl Into<String>,
        domain: impl Into<String>,
        pages: Vec<PageRecord>,
        mut metadata: CrawlMetadata,
    ) -> Self {
        let total_word_count = pages.iter().map(|p| p.word_count).sum();
        metadata.total_pages = pages.len();
        Self {
            seed_url: seed_url.into(),
            domain: domain.into(),
            pages,
            total_word_count,
            created_at: Utc::now(),
            metadata,
        }
    }

    /// Returns true if no page was recorded
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}
