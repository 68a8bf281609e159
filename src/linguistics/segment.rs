//! Rule-based English sentence segmentation

/// Tokens that end in a period without ending a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "fig", "no", "vol", "approx", "dept", "est", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "a.m", "p.m",
];

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];
const OPENERS: &[char] = &['"', '\'', '(', '[', '\u{201c}', '\u{2018}'];

/// Splits text into sentences
///
/// A sentence ends at `.`, `!` or `?` (plus any trailing quotes or brackets)
/// when followed by whitespace and an uppercase letter, digit or opening quote.
/// Periods after known abbreviations and single-letter initials do not end a
/// sentence. Newlines always end a sentence.
///
/// # Examples
///
/// ```
/// use sitelore::linguistics::split_sentences;
///
/// let sentences = split_sentences("Dr. Smith wrote it. Then he left!");
/// assert_eq!(sentences, vec!["Dr. Smith wrote it.", "Then he left!"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < len {
        let c = chars[i];

        if c == '\n' {
            push_sentence(&mut sentences, &chars[start..i]);
            start = i + 1;
            i += 1;
            continue;
        }

        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < len && (TERMINATORS.contains(&chars[end]) || CLOSERS.contains(&chars[end])) {
            end += 1;
        }

        if end >= len {
            push_sentence(&mut sentences, &chars[start..end]);
            start = end;
            i = end;
            continue;
        }

        if chars[end].is_whitespace() && chars[end] != '\n' {
            let mut next = end;
            while next < len && chars[next].is_whitespace() && chars[next] != '\n' {
                next += 1;
            }

            let starts_sentence = next >= len
                || chars[next] == '\n'
                || chars[next].is_uppercase()
                || chars[next].is_ascii_digit()
                || OPENERS.contains(&chars[next]);

            if starts_sentence && !(c == '.' && ends_with_abbreviation(&chars[start..i])) {
                push_sentence(&mut sentences, &chars[start..end]);
                start = end;
            }
        }

        i = end;
    }

    if start < len {
        push_sentence(&mut sentences, &chars[start..]);
    }

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, chars: &[char]) {
    let sentence: String = chars.iter().collect();
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Checks whether the word right before a period is an abbreviation or initial
fn ends_with_abbreviation(before: &[char]) -> bool {
    let word_start = before
        .iter()
        .rposition(|c| c.is_whitespace())
        .map(|p| p + 1)
        .unwrap_or(0);

    let word: String = before[word_start..]
        .iter()
        .skip_while(|c| OPENERS.contains(c))
        .collect::<String>()
        .to_lowercase();

    if word.is_empty() {
        return false;
    }

    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }

    ABBREVIATIONS.contains(&word.as_str())
}
