use crate::enrich::frequency::most_common;
use crate::linguistics::LinguisticResources;

/// Extracts the `max_phrases` most frequent noun/adjective runs
///
/// Within each sentence, consecutive noun or adjective tokens accumulate into a
/// candidate; a candidate of two or more tokens is committed when the run
/// breaks or the sentence ends. Tokens keep their original case.
pub fn extract_key_phrases(
    resources: &dyn LinguisticResources,
    sentences: &[String],
    max_phrases: usize,
) -> Vec<String> {
    let mut phrases = Vec::new();

    for sentence in sentences {
        let tokens = resources.tokenize_words(sentence);
        let mut current: Vec<String> = Vec::new();

        for (token, tag) in resources.pos_tag(&tokens) {
            if tag.is_nominal() {
                current.push(token);
            } else {
                commit_phrase(&mut phrases, &mut current);
            }
        }
        commit_phrase(&mut phrases, &mut current);
    }

    most_common(phrases, max_phrases)
        .into_iter()
        .map(|(phrase, _)| phrase)
        .collect()
}

fn commit_phrase(phrases: &mut Vec<String>, current: &mut Vec<String>) {
    if current.len() >= 2 {
        phrases.push(current.join(" "));
    }
    current.clear();
}
