//! Rule-Based Dialogue Policy
//!
//! Maps a user message plus externally computed NLP signals to a templated
//! reply:
//! - Sentiment categorization from polarity
//! - Greeting detection from tokens
//! - Template-based composition with optional follow-up, greeting and
//!   entity mention
//! - Append-only conversation memory
//!
//! All randomness is drawn from a caller-supplied [`rand::Rng`], so a seeded
//! or mock generator makes every reply reproducible.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use emobot_agent::{DialoguePolicy, ResponseTemplateStore};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let templates = Arc::new(ResponseTemplateStore::with_defaults()?);
//! let mut policy = DialoguePolicy::new(templates);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let reply = policy.process_message(
//!     "hello there", 0.6, &["hello", "there"], &[], chrono::Utc::now(), &mut rng,
//! );
//! ```

pub mod composer;
pub mod conversation;
pub mod greeting;
pub mod memory;
pub mod policy;
pub mod sentiment;
pub mod signals;
pub mod templates;

pub use composer::ResponseComposer;
pub use conversation::Conversation;
pub use greeting::is_greeting;
pub use memory::ConversationMemory;
pub use policy::DialoguePolicy;
pub use sentiment::categorize;
pub use signals::{NlpSignals, SignalExtractor};
pub use templates::{ResponseTemplateStore, TemplateSet};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    /// Template tables are missing or empty
    #[error("Template error: {0}")]
    Templates(String),
}

impl From<emobot_config::ConfigError> for AgentError {
    fn from(err: emobot_config::ConfigError) -> Self {
        AgentError::Templates(err.to_string())
    }
}
