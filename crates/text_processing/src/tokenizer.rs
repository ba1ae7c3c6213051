//! Word tokenization

use emobot_core::{Result, Tokenizer};
use unicode_segmentation::UnicodeSegmentation;

/// Splits text on Unicode word boundaries, dropping punctuation and spaces
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Word tokens in order, case preserved
    pub fn words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.words(text))
    }
}
