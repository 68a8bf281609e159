use crate::enrich::keywords::extract_keywords;
use crate::linguistics::LinguisticResources;

/// Keywords considered per sentence when weighting it
const SENTENCE_KEYWORDS: usize = 5;

/// Picks up to `max_sentences` sentence indices, returned in document order
///
/// Each sentence scores `1/(i+1) + min(words/20, 1) + keywords/10`. When the
/// document is short enough every index is returned.
pub fn select_sentences(
    resources: &dyn LinguisticResources,
    sentences: &[String],
    max_sentences: usize,
) -> Vec<usize> {
    if sentences.len() <= max_sentences {
        return (0..sentences.len()).collect();
    }

    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| (index, score_sentence(resources, index, sentence)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut selected: Vec<usize> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(index, _)| index)
        .collect();
    selected.sort_unstable();
    selected
}

fn score_sentence(resources: &dyn LinguisticResources, index: usize, sentence: &str) -> f64 {
    let position = 1.0 / (index as f64 + 1.0);
    let length = (sentence.split_whitespace().count() as f64 / 20.0).min(1.0);
    let keywords = extract_keywords(resources, sentence, SENTENCE_KEYWORDS).len() as f64 / 10.0;
    position + length + keywords
}

/// Builds an extractive summary joined with single spaces
pub fn summarize(
    resources: &dyn LinguisticResources,
    sentences: &[String],
    max_sentences: usize,
) -> String {
    select_sentences(resources, sentences, max_sentences)
        .into_iter()
        .map(|index| sentences[index].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
