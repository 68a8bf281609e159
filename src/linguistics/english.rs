use super::lemma::lemmatize_noun;
use super::segment::split_sentences;
use super::stopwords::{ENGLISH_STOP_WORDS, WEB_STOP_WORDS};
use super::tagger::tag_tokens;
use super::{LinguisticResources, PosTag, ResourceUnavailable, SegmentationError};
use crate::config::LinguisticsConfig;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// Word, number, or single non-space symbol
const TOKEN_PATTERN: &str = r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]";

/// Built-in English resources
///
/// Constructed once and shared behind an `Arc` by every enrichment call.
#[derive(Debug, Clone)]
pub struct EnglishResources {
    stop_words: HashSet<String>,
    token_pattern: Regex,
}

impl EnglishResources {
    /// Creates resources with the standard and web stop-word lists
    pub fn new() -> Result<Self, ResourceUnavailable> {
        let token_pattern = Regex::new(TOKEN_PATTERN).map_err(|e| ResourceUnavailable {
            resource: "tokenizer".to_string(),
            reason: e.to_string(),
        })?;

        let stop_words = ENGLISH_STOP_WORDS
            .iter()
            .chain(WEB_STOP_WORDS)
            .map(|w| w.to_string())
            .collect();

        Ok(Self {
            stop_words,
            token_pattern,
        })
    }

    /// Creates resources extended with the configured stop words
    ///
    /// Returns `ResourceUnavailable` if the configured stop-word file cannot be read.
    pub fn from_config(config: &LinguisticsConfig) -> Result<Self, ResourceUnavailable> {
        let mut resources = Self::new()?;

        if let Some(path) = &config.stopwords_path {
            let words = load_stop_words(Path::new(path))?;
            resources.add_stop_words(words);
        }

        resources.add_stop_words(config.extra_stopwords.iter().cloned());

        tracing::debug!("Loaded {} stop words", resources.stop_words.len());

        Ok(resources)
    }

    /// Adds stop words, lowercased
    pub fn add_stop_words<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.stop_words.extend(
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

/// Reads a stop-word file: one word per line, `#` starts a comment
fn load_stop_words(path: &Path) -> Result<Vec<String>, ResourceUnavailable> {
    let content = std::fs::read_to_string(path).map_err(|e| ResourceUnavailable {
        resource: format!("stopwords ({})", path.display()),
        reason: e.to_string(),
    })?;

    Ok(content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Splits a contraction the way treebank tokenizers do: "don't" → "do", "n't"
fn split_contraction(token: &str) -> Vec<String> {
    let Some(pos) = token.find(|c: char| c == '\'' || c == '’') else {
        return vec![token.to_string()];
    };

    let apostrophe_len = token[pos..].chars().next().map_or(1, char::len_utf8);
    let after = &token[pos + apostrophe_len..];

    let negation = after.eq_ignore_ascii_case("t")
        && pos > 1
        && token[..pos].ends_with(|c: char| c.eq_ignore_ascii_case(&'n'));

    if negation {
        let stem_end = pos - 1;
        return vec![token[..stem_end].to_string(), token[stem_end..].to_string()];
    }

    vec![token[..pos].to_string(), token[pos..].to_string()]
}

impl LinguisticResources for EnglishResources {
    fn ensure_ready(&self) -> Result<(), ResourceUnavailable> {
        if self.stop_words.is_empty() {
            return Err(ResourceUnavailable {
                resource: "stopwords".to_string(),
                reason: "stop-word list is empty".to_string(),
            });
        }
        Ok(())
    }

    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, SegmentationError> {
        Ok(split_sentences(text))
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        self.token_pattern
            .find_iter(text)
            .flat_map(|m| split_contraction(m.as_str()))
            .collect()
    }

    fn lemmatize(&self, word: &str) -> String {
        lemmatize_noun(word)
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        tag_tokens(tokens)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn resources() -> EnglishResources {
        EnglishResources::new().unwrap()
    }

    #[test]
    fn test_ready_by_default() {
        assert!(resources().ensure_ready().is_ok());
    }

    #[test]
    fn test_stop_words() {
        let r = resources();
        assert!(r.is_stop_word("the"));
        assert!(r.is_stop_word("The"));
        assert!(r.is_stop_word("https"));
        assert!(r.is_stop_word("services"));
        assert!(!r.is_stop_word("crawler"));
    }

    #[test]
    fn test_tokenize_words_and_punctuation() {
        let tokens = resources().tokenize_words("Fast, reliable crawling!");
        assert_eq!(tokens, vec!["Fast", ",", "reliable", "crawling", "!"]);
    }

    #[test]
    fn test_tokenize_keeps_hyphenated_words() {
        let tokens = resources().tokenize_words("state-of-the-art tools");
        assert_eq!(tokens, vec!["state-of-the-art", "tools"]);
    }

    #[test]
    fn test_tokenize_splits_contractions() {
        let tokens = resources().tokenize_words("don't stop, it's fine");
        assert_eq!(tokens, vec!["do", "n't", "stop", ",", "it", "'s", "fine"]);
    }

    #[test]
    fn test_tokenize_numbers() {
        let tokens = resources().tokenize_words("Rust 2021 edition");
        assert_eq!(tokens, vec!["Rust", "2021", "edition"]);
    }

    #[test]
    fn test_extra_stop_words_from_config() {
        let config = LinguisticsConfig {
            stopwords_path: None,
            extra_stopwords: vec!["Lorem".to_string(), " ipsum ".to_string()],
        };
        let r = EnglishResources::from_config(&config).unwrap();
        assert!(r.is_stop_word("lorem"));
        assert!(r.is_stop_word("ipsum"));
    }

    #[test]
    fn test_stop_words_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "acme").unwrap();
        writeln!(file, "widget  # product name").unwrap();
        file.flush().unwrap();

        let config = LinguisticsConfig {
            stopwords_path: Some(file.path().to_string_lossy().to_string()),
            extra_stopwords: Vec::new(),
        };
        let r = EnglishResources::from_config(&config).unwrap();
        assert!(r.is_stop_word("acme"));
        assert!(r.is_stop_word("widget"));
        assert!(!r.is_stop_word("custom"));
    }

    #[test]
    fn test_missing_stop_words_file() {
        let config = LinguisticsConfig {
            stopwords_path: Some("/nonexistent/stopwords.txt".to_string()),
            extra_stopwords: Vec::new(),
        };
        let err = EnglishResources::from_config(&config).unwrap_err();
        assert!(err.resource.starts_with("stopwords"));
    }
}
