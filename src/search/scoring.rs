//! Per-page relevance scores

use crate::enrich::EnrichedPage;
use crate::knowledge::PageRecord;

const KEYWORD_POINTS: f64 = 2.0;
const TITLE_POINTS: f64 = 3.0;
const PHRASE_POINTS: f64 = 1.5;
const BODY_POINTS: f64 = 1.0;

/// Scores an enriched page against lowercased query words
///
/// - 2 per word that is one of the page's keywords
/// - 3 per word found in the title
/// - 1.5 per key phrase containing any word
/// - 1 if any word occurs in the body text
pub fn score_enriched(page: &EnrichedPage, words: &[String]) -> f64 {
    let title = page.original_content.title.to_lowercase();
    let mut score = 0.0;

    for word in words {
        if page.keywords.iter().any(|k| k == word) {
            score += KEYWORD_POINTS;
        }
        if title.contains(word.as_str()) {
            score += TITLE_POINTS;
        }
    }

    for phrase in &page.key_phrases {
        let phrase = phrase.to_lowercase();
        if words.iter().any(|w| phrase.contains(w.as_str())) {
            score += PHRASE_POINTS;
        }
    }

    let body = page.original_content.text_content.to_lowercase();
    if words.iter().any(|w| body.contains(w.as_str())) {
        score += BODY_POINTS;
    }

    score
}

/// Scores a raw page by whole-query substring matches
///
/// 3 if the lowercased query occurs in the title, plus 1 if it occurs in the body.
pub fn score_raw(page: &PageRecord, query: &str) -> f64 {
    let mut score = 0.0;

    if page.title.to_lowercase().contains(query) {
        score += TITLE_POINTS;
    }
    if page.text_content.to_lowercase().contains(query) {
        score += BODY_POINTS;
    }

    score
}
