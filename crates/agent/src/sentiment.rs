//! Sentiment categorization

use emobot_config::constants::polarity;
use emobot_core::SentimentCategory;

/// Bucket a polarity score into a sentiment category
///
/// Both thresholds are exclusive, so `0.3` and `-0.3` are neutral. A NaN
/// score fails both comparisons and is also neutral.
pub fn categorize(score: f64) -> SentimentCategory {
    if score > polarity::POSITIVE {
        SentimentCategory::Positive
    } else if score < polarity::NEGATIVE {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}
