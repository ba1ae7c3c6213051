//! Collaborator traits
//!
//! The dialogue policy consumes three NLP signals that are produced outside
//! this workspace's core: polarity, tokens and named entities. Each is
//! modelled as a trait so a real NLP service, a local heuristic or a test
//! double can be plugged in.

mod nlp;

pub use nlp::{EntityExtractor, PolarityScorer, Tokenizer};
