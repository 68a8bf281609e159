//! Query engine
//!
//! Ranks the pages of a [`Corpus`] against a free-text query. Enriched corpora
//! are scored on keywords, titles, key phrases and body text. Raw corpora fall
//! back to whole-query substring matching on title and body.

mod scoring;

pub use scoring::{score_enriched, score_raw};

use crate::enrich::EnhancedKnowledgeBase;
use crate::knowledge::{KnowledgeBase, PageRecord};
use thiserror::Error;

/// Maximum number of hits returned by [`search`]
pub const MAX_RESULTS: usize = 10;

/// Search errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Search query is empty")]
    EmptyQuery,
}

/// A searchable knowledge base in either form
#[derive(Debug, Clone, PartialEq)]
pub enum Corpus {
    Raw(KnowledgeBase),
    Enriched(EnhancedKnowledgeBase),
}

impl Corpus {
    pub fn len(&self) -> usize {
        match self {
            Self::Raw(kb) => kb.pages.len(),
            Self::Enriched(ekb) => ekb.pages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the crawled record at `index`
    pub fn page(&self, index: usize) -> Option<&PageRecord> {
        match self {
            Self::Raw(kb) => kb.pages.get(index),
            Self::Enriched(ekb) => ekb.pages.get(index).map(|p| &p.original_content),
        }
    }

    /// Text shown under a result: the summary when enriched, otherwise the body
    pub fn preview(&self, index: usize) -> Option<&str> {
        match self {
            Self::Raw(kb) => kb.pages.get(index).map(|p| p.text_content.as_str()),
            Self::Enriched(ekb) => ekb.pages.get(index).map(|p| p.summary.as_str()),
        }
    }

    /// Returns true for the enriched form
    pub fn is_enriched(&self) -> bool {
        matches!(self, Self::Enriched(_))
    }
}

impl From<KnowledgeBase> for Corpus {
    fn from(kb: KnowledgeBase) -> Self {
        Self::Raw(kb)
    }
}

impl From<EnhancedKnowledgeBase> for Corpus {
    fn from(ekb: EnhancedKnowledgeBase) -> Self {
        Self::Enriched(ekb)
    }
}

/// One ranked page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Index into the corpus pages
    pub page_index: usize,
    pub score: f64,
}

/// Ranks corpus pages against `query`
///
/// Returns at most [`MAX_RESULTS`] hits with score > 0, sorted by descending
/// score. Pages with equal scores keep their corpus order.
///
/// # Errors
///
/// Returns [`SearchError::EmptyQuery`] if the query has no words.
pub fn search(corpus: &Corpus, query: &str) -> Result<Vec<SearchHit>, SearchError> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let scores: Vec<f64> = match corpus {
        Corpus::Enriched(ekb) => {
            let words: Vec<String> = query.split_whitespace().map(str::to_string).collect();
            ekb.pages
                .iter()
                .map(|page| score_enriched(page, &words))
                .collect()
        }
        Corpus::Raw(kb) => kb.pages.iter().map(|page| score_raw(page, &query)).collect(),
    };

    let mut hits: Vec<SearchHit> = scores
        .into_iter()
        .enumerate()
        .filter(|(_, score)| *score > 0.0)
        .map(|(page_index, score)| SearchHit { page_index, score })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(MAX_RESULTS);

    tracing::debug!("Query '{}' matched {} pages", query, hits.len());

    Ok(hits)
}
