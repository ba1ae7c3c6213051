//! Dialogue Policy
//!
//! Orchestrates categorization, memory, greeting detection and composition
//! for one conversation. The policy owns its memory; template tables are
//! shared through the composer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use emobot_config::constants::messages::EMPTY_INPUT_PROMPT;
use emobot_core::Entity;
use rand::Rng;

use crate::{categorize, is_greeting, ConversationMemory, ResponseComposer, ResponseTemplateStore};

/// Sentiment-driven reply policy for a single conversation
#[derive(Debug, Clone)]
pub struct DialoguePolicy {
    composer: ResponseComposer,
    memory: ConversationMemory,
}

impl DialoguePolicy {
    /// Create a policy with empty memory
    pub fn new(templates: Arc<ResponseTemplateStore>) -> Self {
        Self {
            composer: ResponseComposer::new(templates),
            memory: ConversationMemory::new(),
        }
    }

    /// Greeting for the start of a conversation
    pub fn greet<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.composer.greeting(rng)
    }

    /// Reply to one user message
    ///
    /// Blank input returns the typing prompt without touching memory.
    /// Otherwise the message is recorded with its category before the reply
    /// is composed.
    pub fn process_message<S, R>(
        &mut self,
        text: &str,
        polarity: f64,
        tokens: &[S],
        entities: &[Entity],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> String
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if text.trim().is_empty() {
            return EMPTY_INPUT_PROMPT.to_string();
        }

        let category = categorize(polarity);
        self.memory.record(text, category, now);

        let greeting_detected = is_greeting(tokens);
        tracing::debug!(
            category = %category,
            polarity = polarity,
            greeting = greeting_detected,
            entities = entities.len(),
            "Processing message"
        );

        self.composer.compose(category, greeting_detected, entities, rng)
    }

    /// Conversation memory (read-only)
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    pub fn composer(&self) -> &ResponseComposer {
        &self.composer
    }
}
