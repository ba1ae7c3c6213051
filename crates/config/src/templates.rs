//! Response Template Configuration
//!
//! Template tables for the dialogue policy. Built-in content is used unless a
//! YAML file is configured via `dialogue.templates_path`:
//!
//! ```yaml
//! responses:
//!   positive: ["That's wonderful to hear!"]
//!   negative: ["That sounds difficult. I'm here to listen."]
//!   neutral: ["I see. Tell me more."]
//! follow_ups:
//!   positive: ["What's making you feel so good today?"]
//!   negative: ["What's been troubling you lately?"]
//!   neutral: ["Is there anything specific you'd like to discuss?"]
//! greetings:
//!   openers: ["Hello! "]
//!   continuations: ["How are you feeling today?"]
//! ```
//!
//! Openers are concatenated with continuations as-is, so an opener carries
//! its own trailing separator.

use emobot_core::SentimentCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// One template list per sentiment category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTemplates {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

impl CategoryTemplates {
    /// Templates for a category
    pub fn get(&self, category: SentimentCategory) -> &[String] {
        match category {
            SentimentCategory::Positive => &self.positive,
            SentimentCategory::Negative => &self.negative,
            SentimentCategory::Neutral => &self.neutral,
        }
    }

    fn validate(&self, table: &str) -> Result<(), ConfigError> {
        for category in SentimentCategory::ALL {
            validate_list(&format!("{}.{}", table, category), self.get(category))?;
        }
        Ok(())
    }
}

/// Greeting openers and the continuations appended to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingTemplates {
    pub openers: Vec<String>,
    pub continuations: Vec<String>,
}

/// All template tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Base replies by category
    #[serde(default = "default_responses")]
    pub responses: CategoryTemplates,
    /// Optional follow-up questions by category
    #[serde(default = "default_follow_ups")]
    pub follow_ups: CategoryTemplates,
    /// Greeting composition
    #[serde(default = "default_greetings")]
    pub greetings: GreetingTemplates,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            responses: default_responses(),
            follow_ups: default_follow_ups(),
            greetings: default_greetings(),
        }
    }
}

impl TemplatesConfig {
    /// Load from a YAML file and validate
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let templates: TemplatesConfig = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        templates.validate()?;

        tracing::debug!(path = %path.display(), "Loaded response templates");
        Ok(templates)
    }

    /// Every table must hold at least one non-blank template
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.responses.validate("responses")?;
        self.follow_ups.validate("follow_ups")?;
        validate_list("greetings.openers", &self.greetings.openers)?;
        validate_list("greetings.continuations", &self.greetings.continuations)?;
        Ok(())
    }
}

fn validate_list(field: &str, templates: &[String]) -> Result<(), ConfigError> {
    if templates.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "At least one template is required".to_string(),
        });
    }
    if let Some(index) = templates.iter().position(|t| t.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("Template {} is blank", index),
        });
    }
    Ok(())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_responses() -> CategoryTemplates {
    CategoryTemplates {
        positive: strings(&[
            "That's wonderful to hear!",
            "I'm so glad you're feeling positive!",
            "Your happiness is contagious!",
        ]),
        negative: strings(&[
            "I'm sorry to hear that. Would you like to talk about it?",
            "That sounds difficult. I'm here to listen.",
            "I understand this is tough. Remember, I'm here for you.",
        ]),
        neutral: strings(&[
            "I see. Tell me more.",
            "Interesting. What else is on your mind?",
            "Got it. How can I assist you further?",
        ]),
    }
}

fn default_follow_ups() -> CategoryTemplates {
    CategoryTemplates {
        positive: strings(&[
            "What's making you feel so good today?",
            "Would you like to share what brought you this happiness?",
        ]),
        negative: strings(&[
            "What's been troubling you lately?",
            "Would it help to talk more about what's bothering you?",
        ]),
        neutral: strings(&[
            "Is there anything specific you'd like to discuss?",
            "Can you tell me more about your current situation?",
        ]),
    }
}

fn default_greetings() -> GreetingTemplates {
    GreetingTemplates {
        openers: strings(&["Hi there! ", "Hello! ", "Greetings! "]),
        continuations: strings(&[
            "How are you feeling today?",
            "What's on your mind today?",
            "How can I help you today?",
        ]),
    }
}
