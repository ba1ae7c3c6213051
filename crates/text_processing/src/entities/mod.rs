//! Proper-Noun Entity Extraction
//!
//! Finds runs of capitalized words and reports them as `PROPN` entities in
//! document order. A lone capitalized word that opens a sentence is taken as
//! ordinary capitalization; runs of two or more capitalized words count
//! anywhere. The pronoun "I" (and its contractions) never counts.
//!
//! # Example
//!
//! ```ignore
//! use emobot_text_processing::CapitalizedSpanExtractor;
//!
//! let entities = CapitalizedSpanExtractor::new().spans("Hey, I met Alice in New York");
//! assert_eq!(entities[0].text, "Alice");
//! assert_eq!(entities[1].text, "New York");
//! ```

use emobot_core::{Entity, EntityExtractor, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Label attached to every extracted span
pub const PROPER_NOUN_LABEL: &str = "PROPN";

/// Runs of capitalized words separated by spaces or tabs
static CAPITALIZED_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\p{Lu}[\p{L}\p{N}'’-]*(?:[ \t]+\p{Lu}[\p{L}\p{N}'’-]*)*").unwrap()
});

/// Capitalized-span entity extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedSpanExtractor;

impl CapitalizedSpanExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Proper-noun spans in document order
    pub fn spans(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for run in CAPITALIZED_RUN.find_iter(text) {
            let mut at_sentence_start = is_sentence_start(&text[..run.start()]);

            for words in split_at_pronoun(run.as_str()) {
                if words.len() == 1 && at_sentence_start {
                    at_sentence_start = false;
                    continue;
                }
                at_sentence_start = false;
                entities.push(Entity::new(join_span(&words), PROPER_NOUN_LABEL));
            }
        }

        entities
    }
}

impl EntityExtractor for CapitalizedSpanExtractor {
    fn extract(&self, text: &str) -> Result<Vec<Entity>> {
        Ok(self.spans(text))
    }
}

fn is_sentence_start(preceding: &str) -> bool {
    let preceding = preceding.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '“' | '‘' | '('));
    preceding.is_empty() || preceding.ends_with(['.', '!', '?'])
}

fn is_pronoun_i(word: &str) -> bool {
    word == "I" || word.starts_with("I'") || word.starts_with("I’")
}

/// Split a run into sub-runs around the pronoun "I"
fn split_at_pronoun(run: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for word in run.split_whitespace() {
        if is_pronoun_i(word) {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(word);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

fn join_span(words: &[&str]) -> String {
    let span = words.join(" ");
    let trimmed = span
        .strip_suffix("'s")
        .or_else(|| span.strip_suffix("’s"))
        .unwrap_or(span.as_str())
        .trim_end_matches(['\'', '’', '-']);
    trimmed.to_string()
}
