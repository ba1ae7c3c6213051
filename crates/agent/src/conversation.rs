//! Conversation Context
//!
//! One conversation's policy, memory and randomness source. A context is
//! never shared between conversations; callers serving concurrent requests
//! for the same conversation must serialize access (e.g. behind a mutex).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use emobot_config::constants::messages::{BOT_NAME, EMPTY_INPUT_PROMPT};
use emobot_core::MemoryRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{DialoguePolicy, ResponseTemplateStore, SignalExtractor};

/// Per-conversation dialogue context
#[derive(Debug)]
pub struct Conversation {
    id: String,
    policy: DialoguePolicy,
    rng: StdRng,
}

impl Conversation {
    /// Create a conversation; `seed` fixes the reply sequence, `None` uses entropy
    pub fn new(id: impl Into<String>, templates: Arc<ResponseTemplateStore>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            id: id.into(),
            policy: DialoguePolicy::new(templates),
            rng,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the bot
    pub fn bot_name(&self) -> &'static str {
        BOT_NAME
    }

    /// Opening greeting
    pub fn greet(&mut self) -> String {
        self.policy.greet(&mut self.rng)
    }

    /// Full turn: extract signals for `text`, then reply
    ///
    /// Blank input is answered before any collaborator is called.
    pub fn respond(&mut self, text: &str, signals: &SignalExtractor, now: DateTime<Utc>) -> String {
        if text.trim().is_empty() {
            return EMPTY_INPUT_PROMPT.to_string();
        }

        let extracted = signals.extract(text);
        self.policy.process_message(
            text,
            extracted.polarity,
            &extracted.tokens,
            &extracted.entities,
            now,
            &mut self.rng,
        )
    }

    /// Reply from signals the caller already computed
    pub fn process_message<S: AsRef<str>>(
        &mut self,
        text: &str,
        polarity: f64,
        tokens: &[S],
        entities: &[emobot_core::Entity],
        now: DateTime<Utc>,
    ) -> String {
        self.policy
            .process_message(text, polarity, tokens, entities, now, &mut self.rng)
    }

    /// Processed messages in order
    pub fn history(&self) -> &[MemoryRecord] {
        self.policy.memory().all()
    }

    pub fn turn_count(&self) -> usize {
        self.policy.memory().len()
    }

    pub fn policy(&self) -> &DialoguePolicy {
        &self.policy
    }
}
