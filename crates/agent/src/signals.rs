//! NLP Signal Extraction
//!
//! Calls the three collaborators for a message. A failing collaborator never
//! fails the turn: its signal is replaced with a neutral fallback (polarity
//! 0.0, no tokens, no entities) and the failure is logged.

use std::sync::Arc;

use emobot_config::constants::polarity;
use emobot_core::{Entity, EntityExtractor, PolarityScorer, Tokenizer};

/// Signals the policy consumes for one message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NlpSignals {
    pub polarity: f64,
    /// Lower-cased word tokens
    pub tokens: Vec<String>,
    /// Entities in document order
    pub entities: Vec<Entity>,
}

/// Bundles the collaborators and applies failure fallbacks
#[derive(Clone)]
pub struct SignalExtractor {
    scorer: Arc<dyn PolarityScorer>,
    tokenizer: Arc<dyn Tokenizer>,
    entities: Arc<dyn EntityExtractor>,
}

impl SignalExtractor {
    pub fn new(
        scorer: Arc<dyn PolarityScorer>,
        tokenizer: Arc<dyn Tokenizer>,
        entities: Arc<dyn EntityExtractor>,
    ) -> Self {
        Self {
            scorer,
            tokenizer,
            entities,
        }
    }

    /// Extract all signals for `text`
    pub fn extract(&self, text: &str) -> NlpSignals {
        NlpSignals {
            polarity: self.polarity(text),
            tokens: self.tokens(text),
            entities: self.entities(text),
        }
    }

    fn polarity(&self, text: &str) -> f64 {
        match self.scorer.polarity(text) {
            Ok(score) if score.is_finite() => score,
            Ok(score) => {
                tracing::warn!(score = score, "Polarity scorer returned a non-finite score, using neutral");
                polarity::FALLBACK
            }
            Err(e) => {
                tracing::warn!(error = %e, service = e.service(), "Polarity scoring failed, using neutral");
                polarity::FALLBACK
            }
        }
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        match self.tokenizer.tokenize(text) {
            Ok(tokens) => tokens.into_iter().map(|t| t.to_lowercase()).collect(),
            Err(e) => {
                tracing::warn!(error = %e, service = e.service(), "Tokenization failed, continuing without tokens");
                Vec::new()
            }
        }
    }

    fn entities(&self, text: &str) -> Vec<Entity> {
        match self.entities.extract(text) {
            Ok(entities) => entities,
            Err(e) => {
                tracing::warn!(error = %e, service = e.service(), "Entity extraction failed, continuing without entities");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for SignalExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalExtractor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emobot_core::{Error, Result};

    struct FixedScorer(f64);
    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct WhitespaceTokenizer;
    impl Tokenizer for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<String>> {
            Ok(text.split_whitespace().map(str::to_string).collect())
        }
    }

    struct FixedEntities(Vec<Entity>);
    impl EntityExtractor for FixedEntities {
        fn extract(&self, _text: &str) -> Result<Vec<Entity>> {
            Ok(self.0.clone())
        }
    }

    struct Broken;
    impl PolarityScorer for Broken {
        fn polarity(&self, _text: &str) -> Result<f64> {
            Err(Error::Polarity("model not loaded".into()))
        }
    }
    impl Tokenizer for Broken {
        fn tokenize(&self, _text: &str) -> Result<Vec<String>> {
            Err(Error::Tokenizer("bad input".into()))
        }
    }
    impl EntityExtractor for Broken {
        fn extract(&self, _text: &str) -> Result<Vec<Entity>> {
            Err(Error::Upstream {
                service: "ner".into(),
                message: "connection refused".into(),
            })
        }
    }

    #[test]
    fn test_extracts_all_signals() {
        let extractor = SignalExtractor::new(
            Arc::new(FixedScorer(0.7)),
            Arc::new(WhitespaceTokenizer),
            Arc::new(FixedEntities(vec![Entity::new("Paris", "GPE")])),
        );

        let signals = extractor.extract("Hello from Paris");
        assert_eq!(signals.polarity, 0.7);
        assert_eq!(signals.tokens, vec!["hello", "from", "paris"]);
        assert_eq!(signals.entities, vec![Entity::new("Paris", "GPE")]);
    }

    #[test]
    fn test_failures_fall_back_independently() {
        let extractor = SignalExtractor::new(
            Arc::new(Broken),
            Arc::new(WhitespaceTokenizer),
            Arc::new(Broken),
        );

        let signals = extractor.extract("hi there");
        assert_eq!(signals.polarity, 0.0);
        assert_eq!(signals.tokens, vec!["hi", "there"]);
        assert!(signals.entities.is_empty());
    }

    #[test]
    fn test_all_failures_give_neutral_signals() {
        let extractor = SignalExtractor::new(Arc::new(Broken), Arc::new(Broken), Arc::new(Broken));
        assert_eq!(extractor.extract("anything"), NlpSignals::default());
    }

    #[test]
    fn test_non_finite_polarity_is_neutral() {
        let extractor = SignalExtractor::new(
            Arc::new(FixedScorer(f64::NAN)),
            Arc::new(WhitespaceTokenizer),
            Arc::new(FixedEntities(Vec::new())),
        );
        assert_eq!(extractor.extract("x").polarity, 0.0);
    }
}
