//! Conversation memory records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SentimentCategory;

/// One processed user message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    text: String,
    sentiment: SentimentCategory,
    timestamp: DateTime<Utc>,
}

impl MemoryRecord {
    pub fn new(text: impl Into<String>, sentiment: SentimentCategory, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            sentiment,
            timestamp,
        }
    }

    /// Original message text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Category derived from the message polarity
    pub fn sentiment(&self) -> SentimentCategory {
        self.sentiment
    }

    /// When the message was processed
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
