//! Sentiment categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discretized polarity bucket driving template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// Every category, in a stable order
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Negative,
        SentimentCategory::Neutral,
    ];

    /// Lowercase identifier, as used in config files and metrics labels
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "positive",
            SentimentCategory::Negative => "negative",
            SentimentCategory::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SentimentCategory::Negative).unwrap();
        assert_eq!(json, "\"negative\"");

        let parsed: SentimentCategory = serde_json::from_str("\"positive\"").unwrap();
        assert_eq!(parsed, SentimentCategory::Positive);
    }

    #[test]
    fn test_display_matches_as_str() {
        for category in SentimentCategory::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
