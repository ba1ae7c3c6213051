//! Response template store
//!
//! Read-only lookup over the template tables. Construction validates that
//! every table is non-empty, so draws from a [`TemplateSet`] cannot fail.

use emobot_config::{CategoryTemplates, TemplatesConfig};
use emobot_core::SentimentCategory;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::AgentError;

/// A non-empty list of templates
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet(Vec<String>);

impl TemplateSet {
    /// Build a set, rejecting an empty list
    pub fn new(name: &str, templates: Vec<String>) -> Result<Self, AgentError> {
        if templates.is_empty() {
            return Err(AgentError::Templates(format!("'{}' has no templates", name)));
        }
        Ok(Self(templates))
    }

    /// Draw one template uniformly
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction
        self.0.choose(rng).map(String::as_str).unwrap_or_default()
    }

    /// All templates in this set
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, template: &str) -> bool {
        self.0.iter().any(|t| t == template)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
struct CategoryTable {
    positive: TemplateSet,
    negative: TemplateSet,
    neutral: TemplateSet,
}

impl CategoryTable {
    fn new(name: &str, templates: &CategoryTemplates) -> Result<Self, AgentError> {
        let set = |category: SentimentCategory| {
            TemplateSet::new(
                &format!("{}.{}", name, category),
                templates.get(category).to_vec(),
            )
        };
        Ok(Self {
            positive: set(SentimentCategory::Positive)?,
            negative: set(SentimentCategory::Negative)?,
            neutral: set(SentimentCategory::Neutral)?,
        })
    }

    fn get(&self, category: SentimentCategory) -> &TemplateSet {
        match category {
            SentimentCategory::Positive => &self.positive,
            SentimentCategory::Negative => &self.negative,
            SentimentCategory::Neutral => &self.neutral,
        }
    }
}

/// Process-wide template tables, shared read-only between conversations
#[derive(Debug, Clone)]
pub struct ResponseTemplateStore {
    replies: CategoryTable,
    follow_ups: CategoryTable,
    greeting_openers: TemplateSet,
    greeting_follow_ups: TemplateSet,
}

impl ResponseTemplateStore {
    /// Build the store from configuration, failing on any empty table
    pub fn new(config: &TemplatesConfig) -> Result<Self, AgentError> {
        config.validate()?;

        Ok(Self {
            replies: CategoryTable::new("responses", &config.responses)?,
            follow_ups: CategoryTable::new("follow_ups", &config.follow_ups)?,
            greeting_openers: TemplateSet::new(
                "greetings.openers",
                config.greetings.openers.clone(),
            )?,
            greeting_follow_ups: TemplateSet::new(
                "greetings.continuations",
                config.greetings.continuations.clone(),
            )?,
        })
    }

    /// Store with the built-in templates
    pub fn with_defaults() -> Result<Self, AgentError> {
        Self::new(&TemplatesConfig::default())
    }

    /// Base replies for a category
    pub fn base_reply(&self, category: SentimentCategory) -> &TemplateSet {
        self.replies.get(category)
    }

    /// Follow-up questions for a category
    pub fn follow_up(&self, category: SentimentCategory) -> &TemplateSet {
        self.follow_ups.get(category)
    }

    /// Greeting openers
    pub fn greeting_opener(&self) -> &TemplateSet {
        &self.greeting_openers
    }

    /// Continuations appended to a greeting opener
    pub fn greeting_follow_up(&self) -> &TemplateSet {
        &self.greeting_follow_ups
    }
}
