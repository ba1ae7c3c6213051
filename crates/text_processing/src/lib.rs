//! Text Processing for EmoBot
//!
//! Local, dependency-light implementations of the NLP collaborators the
//! dialogue policy consumes:
//! - **Tokenization**: Unicode word segmentation
//! - **Polarity**: Lexicon scoring with negation and intensifiers
//! - **Entities**: Proper-noun spans and self-introductions
//!
//! These are heuristics. Anything implementing the `emobot_core` traits
//! (e.g. a client for an external NLP service) can replace them.
//!
//! # Example
//!
//! ```ignore
//! use emobot_core::{PolarityScorer, Tokenizer};
//! use emobot_text_processing::{LexiconSentimentScorer, WordTokenizer};
//!
//! let tokens = WordTokenizer::new().tokenize("Hello, I'm so happy!")?;
//! let polarity = LexiconSentimentScorer::new().polarity("I'm so happy!")?;
//! ```

pub mod entities;
pub mod sentiment;
pub mod tokenizer;

pub use entities::CapitalizedSpanExtractor;
pub use sentiment::LexiconSentimentScorer;
pub use tokenizer::WordTokenizer;
