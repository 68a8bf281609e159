use crate::enrich::frequency::most_common;
use crate::linguistics::LinguisticResources;
use std::collections::BTreeMap;

/// Lowercased alphabetic tokens longer than two characters that are not stop words
pub fn content_words(resources: &dyn LinguisticResources, text: &str) -> Vec<String> {
    resources
        .tokenize_words(&text.to_lowercase())
        .into_iter()
        .filter(|word| {
            word.chars().count() > 2
                && word.chars().all(char::is_alphabetic)
                && !resources.is_stop_word(word)
        })
        .collect()
}

/// Returns the `max_keywords` most frequent lemmatized content words
///
/// Ties are broken by first occurrence in the text.
pub fn extract_keywords(
    resources: &dyn LinguisticResources,
    text: &str,
    max_keywords: usize,
) -> Vec<String> {
    let lemmas = content_words(resources, text)
        .iter()
        .map(|word| resources.lemmatize(word))
        .collect::<Vec<_>>();

    most_common(lemmas, max_keywords)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

/// Counts non-lemmatized content words across sentences, keeping the top `limit`
pub fn word_frequencies(
    resources: &dyn LinguisticResources,
    sentences: &[String],
    limit: usize,
) -> BTreeMap<String, usize> {
    let words = sentences
        .iter()
        .flat_map(|sentence| content_words(resources, sentence));

    most_common(words, limit).into_iter().collect()
}
