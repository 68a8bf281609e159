//! Document-level artifacts built from all enriched pages

use crate::enrich::frequency::most_common;
use crate::enrich::model::{EnrichedPage, EnrichmentStatistics};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Maps lowercased keywords and multi-word key phrases to page indices
pub fn build_search_index(pages: &[EnrichedPage]) -> BTreeMap<String, BTreeSet<usize>> {
    let mut index: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();

    for (page_index, page) in pages.iter().enumerate() {
        for keyword in &page.keywords {
            index
                .entry(keyword.to_lowercase())
                .or_default()
                .insert(page_index);
        }

        for phrase in &page.key_phrases {
            let words: Vec<String> = phrase.split_whitespace().map(str::to_lowercase).collect();
            if words.len() >= 2 {
                index.entry(words.join(" ")).or_default().insert(page_index);
            }
        }
    }

    index
}

/// Buckets every distinct keyword by its uppercased first character
pub fn cluster_topics(pages: &[EnrichedPage]) -> BTreeMap<String, BTreeSet<String>> {
    let mut clusters: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for keyword in pages.iter().flat_map(|p| &p.keywords) {
        let Some(first) = keyword.chars().next() else {
            continue;
        };
        clusters
            .entry(first.to_uppercase().collect())
            .or_default()
            .insert(keyword.clone());
    }

    clusters
}

/// The `limit` keywords appearing in the most pages' keyword lists
pub fn global_keywords(pages: &[EnrichedPage], limit: usize) -> Vec<String> {
    let all = pages.iter().flat_map(|p| p.keywords.iter().cloned());
    most_common(all, limit)
        .into_iter()
        .map(|(keyword, _)| keyword)
        .collect()
}

impl EnrichmentStatistics {
    /// Aggregates over all pages; an empty corpus yields zeroes
    pub fn from_pages(pages: &[EnrichedPage]) -> Self {
        let total_sentences = pages.iter().map(|p| p.sentences.len()).sum();

        let avg_readability_score = if pages.is_empty() {
            0.0
        } else {
            pages.iter().map(|p| p.readability_score).sum::<f64>() / pages.len() as f64
        };

        let all_keywords: Vec<&String> = pages.iter().flat_map(|p| &p.keywords).collect();
        let unique: HashSet<&String> = all_keywords.iter().copied().collect();

        Self {
            total_processed_pages: pages.len(),
            total_sentences,
            avg_readability_score,
            unique_keywords: unique.len(),
            total_keywords: all_keywords.len(),
        }
    }
}
