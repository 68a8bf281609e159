use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured content extracted from one fetched page
///
/// Records are created once by the crawler and never mutated. `word_count` is
/// always the whitespace-token count of `text_content`; use [`PageRecord::new`]
/// to keep the two in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub headings: Vec<String>,
    pub paragraphs: Vec<String>,
    /// Same-domain outbound links, deduplicated, in first-occurrence order
    pub links: Vec<String>,
    pub metadata: BTreeMap<String, String>,
    pub fetched_at: DateTime<Utc>,
    pub word_count: usize,
    pub text_content: String,
}

impl PageRecord {
    /// Creates a record, deriving `word_count` from `text_content`
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        headings: Vec<String>,
        paragraphs: Vec<String>,
        links: Vec<String>,
        metadata: BTreeMap<String, String>,
        text_content: impl Into<String>,
    ) -> Self {
        let text_content = text_content.into();
        Self {
            url: url.into(),
            title: title.into(),
            headings,
            paragraphs,
            links,
            metadata,
            fetched_at: Utc::now(),
            word_count: count_words(&text_content),
            text_content,
        }
    }
}

/// Number of whitespace-separated tokens in `text`
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
