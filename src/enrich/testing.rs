//! Resource doubles shared by the enrichment tests

use crate::linguistics::{
    EnglishResources, LinguisticResources, PosTag, ResourceUnavailable, SegmentationError,
};

pub fn english() -> EnglishResources {
    EnglishResources::new().unwrap()
}

/// English resources whose sentence segmentation always fails
pub struct FailingSegmenter(EnglishResources);

impl FailingSegmenter {
    pub fn new() -> Self {
        Self(english())
    }
}

impl LinguisticResources for FailingSegmenter {
    fn ensure_ready(&self) -> Result<(), ResourceUnavailable> {
        self.0.ensure_ready()
    }

    fn segment_sentences(&self, _text: &str) -> Result<Vec<String>, SegmentationError> {
        Err(SegmentationError("punkt model missing".to_string()))
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        self.0.tokenize_words(text)
    }

    fn lemmatize(&self, word: &str) -> String {
        self.0.lemmatize(word)
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        self.0.pos_tag(tokens)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.0.is_stop_word(word)
    }
}

/// Resources that were never provisioned
pub struct UnprovisionedResources;

impl LinguisticResources for UnprovisionedResources {
    fn ensure_ready(&self) -> Result<(), ResourceUnavailable> {
        Err(ResourceUnavailable {
            resource: "wordnet".to_string(),
            reason: "not installed".to_string(),
        })
    }

    fn segment_sentences(&self, _text: &str) -> Result<Vec<String>, SegmentationError> {
        Ok(Vec::new())
    }

    fn tokenize_words(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }

    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        tokens.iter().map(|t| (t.clone(), PosTag::Other)).collect()
    }

    fn is_stop_word(&self, _word: &str) -> bool {
        false
    }
}
