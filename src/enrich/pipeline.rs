//! Enrichment pipeline
//!
//! Drives every per-page analysis over a knowledge base and then builds the
//! corpus-level artifacts from the results.

use crate::config::EnrichmentConfig;
use crate::enrich::corpus::{build_search_index, cluster_topics, global_keywords};
use crate::enrich::keywords::{extract_keywords, word_frequencies};
use crate::enrich::model::{EnhancedKnowledgeBase, EnrichedPage, EnrichmentStatistics};
use crate::enrich::phrases::extract_key_phrases;
use crate::enrich::readability::flesch_reading_ease;
use crate::enrich::sentences::extract_sentences;
use crate::enrich::summary::summarize;
use crate::enrich::EnrichError;
use crate::knowledge::{KnowledgeBase, PageRecord};
use crate::linguistics::LinguisticResources;
use chrono::Utc;
use std::sync::Arc;

/// Derives enriched pages and corpus artifacts from a knowledge base
pub struct Enricher {
    resources: Arc<dyn LinguisticResources>,
    config: EnrichmentConfig,
}

impl Enricher {
    /// Creates a pipeline over the given resources
    ///
    /// Fails with `ResourceUnavailable` if the resources are not ready.
    pub fn new(
        resources: Arc<dyn LinguisticResources>,
        config: EnrichmentConfig,
    ) -> Result<Self, EnrichError> {
        resources.ensure_ready()?;
        Ok(Self { resources, config })
    }

    pub fn config(&self) -> &EnrichmentConfig {
        &self.config
    }

    /// Enriches every page and builds the document-level artifacts
    pub fn enrich(&self, kb: KnowledgeBase) -> EnhancedKnowledgeBase {
        tracing::info!("Enriching {} pages from {}", kb.pages.len(), kb.domain);

        let pages: Vec<EnrichedPage> = kb
            .pages
            .iter()
            .map(|page| self.enrich_page(page.clone()))
            .collect();

        let enhanced = EnhancedKnowledgeBase {
            global_keywords: global_keywords(&pages, self.config.global_keywords),
            topic_clusters: cluster_topics(&pages),
            search_index: build_search_index(&pages),
            statistics: EnrichmentStatistics::from_pages(&pages),
            processed_at: Utc::now(),
            pages,
            source: kb,
        };

        tracing::info!(
            "Enrichment complete: {} sentences, {} unique keywords",
            enhanced.statistics.total_sentences,
            enhanced.statistics.unique_keywords
        );

        enhanced
    }

    /// Derives sentences, keywords, summary, key phrases and readability for one page
    ///
    /// A page with no text yields an empty record.
    pub fn enrich_page(&self, page: PageRecord) -> EnrichedPage {
        let text = page.text_content.as_str();
        if text.trim().is_empty() {
            tracing::debug!("No text on {}, skipping analysis", page.url);
            return EnrichedPage::empty(page);
        }

        let resources = self.resources.as_ref();
        let sentences = extract_sentences(resources, text);
        let keywords = extract_keywords(resources, text, self.config.max_keywords);
        let word_frequencies =
            word_frequencies(resources, &sentences, self.config.word_frequencies);
        let summary = summarize(resources, &sentences, self.config.summary_sentences);
        let key_phrases =
            extract_key_phrases(resources, &sentences, self.config.max_key_phrases);
        let readability_score = flesch_reading_ease(resources, &sentences);

        tracing::debug!(
            "{}: {} sentences, {} keywords, readability {:.1}",
            page.url,
            sentences.len(),
            keywords.len(),
            readability_score
        );

        EnrichedPage {
            original_content: page,
            sentences,
            keywords,
            word_frequencies,
            summary,
            key_phrases,
            readability_score,
        }
    }
}
