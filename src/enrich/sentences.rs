use crate::linguistics::LinguisticResources;

/// Sentences must be longer than this many characters
const MIN_SENTENCE_CHARS: usize = 20;

/// Upper bound on sentences produced by the period-splitting fallback
const FALLBACK_SENTENCE_CAP: usize = 50;

/// Segments text into meaningful sentences
///
/// Sentences of 20 characters or fewer, and those starting with "http", are
/// discarded. When segmentation fails the text is split on literal periods
/// instead.
pub fn extract_sentences(resources: &dyn LinguisticResources, text: &str) -> Vec<String> {
    match resources.segment_sentences(text) {
        Ok(sentences) => sentences
            .iter()
            .map(|s| s.trim())
            .filter(|s| is_meaningful(s))
            .map(str::to_string)
            .collect(),
        Err(e) => {
            tracing::warn!("{}, splitting on periods instead", e);
            split_on_periods(text)
        }
    }
}

fn is_meaningful(sentence: &str) -> bool {
    sentence.chars().count() > MIN_SENTENCE_CHARS && !sentence.starts_with("http")
}

/// Splits on every period, re-terminating each piece, capped at 50 pieces
pub fn split_on_periods(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
        .take(FALLBACK_SENTENCE_CAP)
        .collect()
}
