use crate::linguistics::LinguisticResources;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Estimates syllables in a word from its vowel runs
///
/// # Examples
///
/// ```
/// use sitelore::enrich::count_syllables;
///
/// assert_eq!(count_syllables("hello"), 2);
/// assert_eq!(count_syllables("cake"), 1);
/// assert_eq!(count_syllables("the"), 1);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let Some(&first) = chars.first() else {
        return 1;
    };

    let is_vowel = |c: &char| VOWELS.contains(c);

    let mut count: isize = if is_vowel(&first) { 1 } else { 0 };
    count += chars
        .windows(2)
        .filter(|pair| is_vowel(&pair[1]) && !is_vowel(&pair[0]))
        .count() as isize;

    if chars.last() == Some(&'e') {
        count -= 1;
    }

    count.max(1) as usize
}

/// Flesch Reading Ease over the given sentences, clamped to [0, 100]
///
/// Only tokens containing a letter or digit count as words. Returns 0.0 when
/// there are no sentences or no words.
pub fn flesch_reading_ease(resources: &dyn LinguisticResources, sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }

    let words: Vec<String> = sentences
        .iter()
        .flat_map(|sentence| resources.tokenize_words(sentence))
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .collect();

    if words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences.len() as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}
