//! Linguistic resources capability
//!
//! The enrichment pipeline never reaches for global NLP state. It is handed an
//! implementation of [`LinguisticResources`] constructed once at startup, usually
//! [`EnglishResources`], and calls it for:
//! - sentence segmentation
//! - word tokenization
//! - lemmatization
//! - part-of-speech tagging
//! - stop-word membership

mod english;
mod lemma;
mod segment;
mod stopwords;
mod tagger;

pub use english::EnglishResources;
pub use lemma::lemmatize_noun;
pub use segment::split_sentences;
pub use stopwords::{ENGLISH_STOP_WORDS, WEB_STOP_WORDS};
pub use tagger::tag_tokens;

use std::fmt;
use thiserror::Error;

/// Sentence segmentation could not process the text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Sentence segmentation failed: {0}")]
pub struct SegmentationError(pub String);

/// A linguistic resource was not provisioned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Linguistic resource '{resource}' unavailable: {reason}")]
pub struct ResourceUnavailable {
    pub resource: String,
    pub reason: String,
}

/// Coarse part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

impl PosTag {
    /// Returns true for tags that may be part of a key phrase
    pub fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun | Self::Adjective)
    }

    /// Penn Treebank style short form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "NN",
            Self::ProperNoun => "NNP",
            Self::Adjective => "JJ",
            Self::Verb => "VB",
            Self::Adverb => "RB",
            Self::Determiner => "DT",
            Self::Pronoun => "PRP",
            Self::Preposition => "IN",
            Self::Conjunction => "CC",
            Self::Number => "CD",
            Self::Punctuation => ".",
            Self::Other => "XX",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Language capability consumed by the enrichment pipeline
pub trait LinguisticResources: Send + Sync {
    /// Verifies every resource is loaded and usable
    fn ensure_ready(&self) -> Result<(), ResourceUnavailable>;

    fn segment_sentences(&self, text: &str) -> Result<Vec<String>, SegmentationError>;

    fn tokenize_words(&self, text: &str) -> Vec<String>;

    /// Reduces a word to its dictionary base form
    fn lemmatize(&self, word: &str) -> String;

    fn pos_tag(&self, tokens: &[String]) -> Vec<(String, PosTag)>;

    fn is_stop_word(&self, word: &str) -> bool;
}
