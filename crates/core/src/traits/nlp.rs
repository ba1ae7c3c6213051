//! NLP signal interfaces

use crate::{Entity, Result};

/// Sentiment polarity scoring
///
/// Implementations return a score conventionally bounded to `[-1.0, 1.0]`,
/// negative meaning unfavorable.
///
/// # Example
///
/// ```ignore
/// let scorer: Box<dyn PolarityScorer> = Box::new(LexiconSentimentScorer::new());
/// let polarity = scorer.polarity("I love this")?;
/// assert!(polarity > 0.0);
/// ```
pub trait PolarityScorer: Send + Sync {
    /// Score the polarity of `text`
    fn polarity(&self, text: &str) -> Result<f64>;
}

/// Word tokenization
pub trait Tokenizer: Send + Sync {
    /// Split `text` into word tokens, preserving order
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Named-entity recognition
pub trait EntityExtractor: Send + Sync {
    /// Extract entity spans in document order
    fn extract(&self, text: &str) -> Result<Vec<Entity>>;
}
