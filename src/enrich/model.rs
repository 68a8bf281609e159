use crate::knowledge::{KnowledgeBase, PageRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One page with its derived linguistic artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPage {
    pub original_content: PageRecord,
    pub sentences: Vec<String>,
    /// Lemmatized keywords, most frequent first
    pub keywords: Vec<String>,
    pub word_frequencies: BTreeMap<String, usize>,
    pub summary: String,
    pub key_phrases: Vec<String>,
    /// Flesch Reading Ease in [0, 100]
    pub readability_score: f64,
}

impl EnrichedPage {
    /// Record for a page with no text to analyse
    pub fn empty(page: PageRecord) -> Self {
        Self {
            original_content: page,
            sentences: Vec::new(),
            keywords: Vec::new(),
            word_frequencies: BTreeMap::new(),
            summary: String::new(),
            key_phrases: Vec::new(),
            readability_score: 0.0,
        }
    }
}

/// Corpus-wide aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentStatistics {
    pub total_processed_pages: usize,
    pub total_sentences: usize,
    pub avg_readability_score: f64,
    pub unique_keywords: usize,
    pub total_keywords: usize,
}

/// A knowledge base plus everything derived from it
///
/// `pages` is index-aligned with `source.pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedKnowledgeBase {
    #[serde(rename = "originalKb")]
    pub source: KnowledgeBase,
    #[serde(rename = "processedContent")]
    pub pages: Vec<EnrichedPage>,
    pub global_keywords: Vec<String>,
    /// Uppercased first character → keywords starting with it
    pub topic_clusters: BTreeMap<String, BTreeSet<String>>,
    /// Lowercased keyword or key phrase → indices of pages containing it
    pub search_index: BTreeMap<String, BTreeSet<usize>>,
    pub statistics: EnrichmentStatistics,
    pub processed_at: DateTime<Utc>,
}

impl EnhancedKnowledgeBase {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
