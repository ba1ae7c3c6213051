//! Core traits and types for EmoBot
//!
//! This crate provides the foundational types shared by every other crate:
//! - Sentiment categories and named entities
//! - Conversation memory records
//! - Collaborator traits for the NLP signals the dialogue policy consumes
//! - Error types

pub mod conversation;
pub mod entity;
pub mod sentiment;
pub mod traits;

pub use conversation::MemoryRecord;
pub use entity::Entity;
pub use sentiment::SentimentCategory;
pub use traits::{EntityExtractor, PolarityScorer, Tokenizer};

/// Result alias using the core [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by collaborator services
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Polarity scoring failed or produced no usable value
    #[error("Polarity scoring failed: {0}")]
    Polarity(String),

    /// Tokenization failed
    #[error("Tokenization failed: {0}")]
    Tokenizer(String),

    /// Named-entity extraction failed
    #[error("Entity extraction failed: {0}")]
    EntityExtraction(String),

    /// Any other collaborator failure
    #[error("Upstream service '{service}' failed: {message}")]
    Upstream { service: String, message: String },
}

impl Error {
    /// Name of the collaborator that produced this error
    pub fn service(&self) -> &str {
        match self {
            Error::Polarity(_) => "polarity",
            Error::Tokenizer(_) => "tokenizer",
            Error::EntityExtraction(_) => "entities",
            Error::Upstream { service, .. } => service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names() {
        assert_eq!(Error::Polarity("x".into()).service(), "polarity");
        assert_eq!(Error::Tokenizer("x".into()).service(), "tokenizer");
        assert_eq!(Error::EntityExtraction("x".into()).service(), "entities");

        let err = Error::Upstream {
            service: "spacy".to_string(),
            message: "timeout".to_string(),
        };
        assert_eq!(err.service(), "spacy");
        assert_eq!(err.to_string(), "Upstream service 'spacy' failed: timeout");
    }
}
