//! Lexicon Polarity Scoring
//!
//! Scores text in [-1.0, 1.0] by averaging the polarity of known words.
//! A negator ("not", "never", "don't", ...) within the next few words halves
//! and flips the next scored word; an intensifier directly before a scored
//! word scales it. Text with no known words scores 0.0.

use std::collections::HashMap;

use emobot_core::{PolarityScorer, Result};
use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

/// Number of words a negator reaches forward
const NEGATION_WINDOW: usize = 3;

/// Multiplier applied to a negated word's score
const NEGATION_FACTOR: f64 = -0.5;

static DEFAULT_LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        // Positive
        ("good", 0.7),
        ("great", 0.8),
        ("happy", 0.8),
        ("glad", 0.5),
        ("love", 0.5),
        ("loved", 0.7),
        ("lovely", 0.5),
        ("nice", 0.6),
        ("wonderful", 1.0),
        ("awesome", 1.0),
        ("excellent", 1.0),
        ("amazing", 0.6),
        ("fantastic", 0.4),
        ("best", 1.0),
        ("better", 0.5),
        ("fine", 0.4),
        ("excited", 0.4),
        ("fun", 0.3),
        ("beautiful", 0.85),
        ("perfect", 1.0),
        ("grateful", 0.6),
        ("thankful", 0.5),
        ("calm", 0.3),
        ("proud", 0.8),
        ("enjoy", 0.4),
        ("enjoyed", 0.4),
        // Negative
        ("bad", -0.7),
        ("sad", -0.5),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("hate", -0.8),
        ("angry", -0.5),
        ("upset", -0.5),
        ("worst", -1.0),
        ("worse", -0.4),
        ("tired", -0.4),
        ("lonely", -0.5),
        ("depressed", -0.6),
        ("miserable", -1.0),
        ("annoying", -0.8),
        ("annoyed", -0.5),
        ("stressed", -0.5),
        ("anxious", -0.5),
        ("worried", -0.5),
        ("scared", -0.6),
        ("afraid", -0.6),
        ("hurt", -0.5),
        ("boring", -1.0),
        ("poor", -0.4),
        ("sick", -0.7),
        ("disappointed", -0.75),
        ("frustrated", -0.7),
    ])
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("super", 1.3),
        ("quite", 1.1),
        ("slightly", 0.5),
        ("somewhat", 0.7),
        ("little", 0.7),
    ])
});

const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "nobody", "neither", "nor", "dont", "cant", "wont"];

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

/// Lexicon-based [`PolarityScorer`]
#[derive(Debug, Clone)]
pub struct LexiconSentimentScorer {
    lexicon: HashMap<String, f64>,
}

impl LexiconSentimentScorer {
    /// Scorer with the built-in English lexicon
    pub fn new() -> Self {
        Self::with_lexicon(DEFAULT_LEXICON.iter().map(|(w, s)| (w.to_string(), *s)))
    }

    /// Scorer with a custom lexicon; words are matched case-insensitively
    pub fn with_lexicon(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        let lexicon = entries
            .into_iter()
            .map(|(word, score)| (word.to_lowercase(), score.clamp(-1.0, 1.0)))
            .collect();
        Self { lexicon }
    }

    /// Polarity of `text` in [-1.0, 1.0]
    pub fn score(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut negation_left = 0usize;
        let mut intensity = 1.0;

        for raw in text.unicode_words() {
            let word = raw.to_lowercase().replace('’', "'");

            if is_negator(&word) {
                negation_left = NEGATION_WINDOW;
                intensity = 1.0;
                continue;
            }
            if let Some(factor) = INTENSIFIERS.get(word.as_str()) {
                intensity *= factor;
                continue;
            }

            match self.lexicon.get(&word) {
                Some(&value) => {
                    let mut score = value * intensity;
                    if negation_left > 0 {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score);
                    negation_left = 0;
                }
                None => {
                    negation_left = negation_left.saturating_sub(1);
                }
            }
            intensity = 1.0;
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl Default for LexiconSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconSentimentScorer {
    fn polarity(&self, text: &str) -> Result<f64> {
        Ok(self.score(text))
    }
}
