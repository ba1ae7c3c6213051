//! Conversation Memory
//!
//! Append-only, unbounded log of processed messages for one conversation.
//! Records are never updated or removed.

use chrono::{DateTime, Utc};
use emobot_core::{MemoryRecord, SentimentCategory};

/// Chronological log of one conversation's messages
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    records: Vec<MemoryRecord>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn record(&mut self, text: &str, sentiment: SentimentCategory, timestamp: DateTime<Utc>) {
        if let Some(last) = self.records.last() {
            if timestamp < last.timestamp() {
                tracing::warn!(
                    previous = %last.timestamp(),
                    timestamp = %timestamp,
                    "Memory record timestamp is earlier than the previous record"
                );
            }
        }

        self.records.push(MemoryRecord::new(text, sentiment, timestamp));
    }

    /// All records in call order
    pub fn all(&self) -> &[MemoryRecord] {
        &self.records
    }

    /// Most recent record
    pub fn last(&self) -> Option<&MemoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
