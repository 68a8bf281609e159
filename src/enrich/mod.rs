//! Text enrichment
//!
//! Turns a crawled [`KnowledgeBase`](crate::knowledge::KnowledgeBase) into an
//! [`EnhancedKnowledgeBase`]:
//! - per page: sentences, keywords, word frequencies, summary, key phrases, readability
//! - per corpus: global keywords, topic clusters, search index, statistics
//!
//! All language work goes through an injected
//! [`LinguisticResources`](crate::linguistics::LinguisticResources).

mod corpus;
mod frequency;
mod keywords;
mod model;
mod phrases;
mod pipeline;
mod readability;
mod sentences;
mod summary;

#[cfg(test)]
mod testing;

pub use corpus::{build_search_index, cluster_topics, global_keywords};
pub use frequency::most_common;
pub use keywords::{content_words, extract_keywords, word_frequencies};
pub use model::{EnhancedKnowledgeBase, EnrichedPage, EnrichmentStatistics};
pub use phrases::extract_key_phrases;
pub use pipeline::Enricher;
pub use readability::{count_syllables, flesch_reading_ease};
pub use sentences::{extract_sentences, split_on_periods};
pub use summary::{select_sentences, summarize};

use crate::linguistics::ResourceUnavailable;
use thiserror::Error;

/// Errors that stop the enrichment stage
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("{0}")]
    ResourceUnavailable(#[from] ResourceUnavailable),
}
