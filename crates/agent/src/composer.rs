//! Response Composer
//!
//! Builds the reply string for one message:
//! 1. A base reply for the sentiment category
//! 2. A follow-up question, when a uniform draw exceeds the threshold
//! 3. A greeting prefix, when the message greets
//! 4. An entity mention, when the message names an entity
//!
//! The composer holds no per-conversation state and performs no I/O.

use std::sync::Arc;

use emobot_config::constants::composition::{ENTITY_MENTION_PREFIX, FOLLOW_UP_THRESHOLD};
use emobot_core::{Entity, SentimentCategory};
use rand::Rng;

use crate::ResponseTemplateStore;

/// Template-based reply synthesis
#[derive(Debug, Clone)]
pub struct ResponseComposer {
    templates: Arc<ResponseTemplateStore>,
}

impl ResponseComposer {
    pub fn new(templates: Arc<ResponseTemplateStore>) -> Self {
        Self { templates }
    }

    /// Template tables backing this composer
    pub fn templates(&self) -> &ResponseTemplateStore {
        &self.templates
    }

    /// Compose a reply
    ///
    /// Draw order is fixed (base, follow-up roll, follow-up, opener,
    /// continuation) so a seeded RNG reproduces the same reply.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        category: SentimentCategory,
        greeting_detected: bool,
        entities: &[Entity],
        rng: &mut R,
    ) -> String {
        let mut response = self.templates.base_reply(category).choose(rng).to_string();

        let roll: f64 = rng.gen();
        if roll > FOLLOW_UP_THRESHOLD {
            response.push(' ');
            response.push_str(self.templates.follow_up(category).choose(rng));
        }

        if greeting_detected {
            response = format!("{} {}", self.greeting(rng), response);
        }

        if let Some(entity) = entities.first() {
            response.push(' ');
            response.push_str(&entity_mention(&entity.text));
        }

        response
    }

    /// Opener followed directly by a continuation
    pub fn greeting<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let opener = self.templates.greeting_opener().choose(rng);
        let continuation = self.templates.greeting_follow_up().choose(rng);
        format!("{}{}", opener, continuation)
    }
}

/// Sentence noting the first entity a message mentioned
pub fn entity_mention(text: &str) -> String {
    format!("{}{}.", ENTITY_MENTION_PREFIX, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Picks index 0 and rolls 0.0, so no follow-up
    fn first_pick_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Low 32 bits pick index 0; high bits roll just under 1.0, so follow-up
    fn follow_up_rng() -> StepRng {
        StepRng::new(0xFFFF_FFFF_0000_0000, 0)
    }

    fn composer() -> ResponseComposer {
        ResponseComposer::new(Arc::new(ResponseTemplateStore::with_defaults().unwrap()))
    }

    #[test]
    fn test_base_reply_only() {
        let composer = composer();
        let store = composer.templates();

        for category in SentimentCategory::ALL {
            let reply = composer.compose(category, false, &[], &mut first_pick_rng());
            assert_eq!(reply, store.base_reply(category).as_slice()[0]);
        }
    }

    #[test]
    fn test_follow_up_appended_with_single_space() {
        let composer = composer();
        let store = composer.templates();

        let reply = composer.compose(SentimentCategory::Negative, false, &[], &mut follow_up_rng());
        let expected = format!(
            "{} {}",
            store.base_reply(SentimentCategory::Negative).as_slice()[0],
            store.follow_up(SentimentCategory::Negative).as_slice()[0]
        );
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_roll_at_threshold_adds_no_follow_up() {
        let composer = composer();
        let store = composer.templates();
        // High bits roll exactly 0.5, low bits pick index 0
        let mut rng = StepRng::new(1 << 63, 0);

        for category in SentimentCategory::ALL {
            let reply = composer.compose(category, false, &[], &mut rng);
            assert_eq!(reply, store.base_reply(category).as_slice()[0]);
        }
    }

    #[test]
    fn test_greeting_prefixed() {
        let composer = composer();
        let store = composer.templates();

        let reply = composer.compose(SentimentCategory::Positive, true, &[], &mut first_pick_rng());
        let expected = format!(
            "{}{} {}",
            store.greeting_opener().as_slice()[0],
            store.greeting_follow_up().as_slice()[0],
            store.base_reply(SentimentCategory::Positive).as_slice()[0]
        );
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_entity_mention_uses_first_entity_only() {
        let composer = composer();
        let entities = vec![Entity::new("Paris", "GPE"), Entity::new("London", "GPE")];

        let reply = composer.compose(SentimentCategory::Neutral, false, &entities, &mut first_pick_rng());
        assert!(reply.ends_with(" By the way, I noticed you mentioned Paris."));
        assert!(!reply.contains("London"));
        assert!(!reply.contains("GPE"));
    }

    #[test]
    fn test_all_parts_in_order() {
        let composer = composer();
        let store = composer.templates();
        let entities = vec![Entity::new("Alice", "PERSON")];

        let reply = composer.compose(SentimentCategory::Positive, true, &entities, &mut follow_up_rng());
        let expected = format!(
            "{}{} {} {} By the way, I noticed you mentioned Alice.",
            store.greeting_opener().as_slice()[0],
            store.greeting_follow_up().as_slice()[0],
            store.base_reply(SentimentCategory::Positive).as_slice()[0],
            store.follow_up(SentimentCategory::Positive).as_slice()[0],
        );
        assert_eq!(reply, expected);
    }

    #[test]
    fn test_reply_starts_with_base_template() {
        let composer = composer();
        let store = composer.templates();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..50 {
            for category in SentimentCategory::ALL {
                let reply = composer.compose(category, false, &[], &mut rng);
                assert!(!reply.is_empty());
                assert!(
                    store
                        .base_reply(category)
                        .as_slice()
                        .iter()
                        .any(|t| reply.starts_with(t.as_str())),
                    "unexpected reply: {}",
                    reply
                );
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let composer = composer();
        let entities = vec![Entity::new("Berlin", "GPE")];

        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                composer.compose(SentimentCategory::Neutral, true, &entities, &mut a),
                composer.compose(SentimentCategory::Neutral, true, &entities, &mut b)
            );
        }
    }

    #[test]
    fn test_follow_up_roughly_half_the_time() {
        let composer = composer();
        let store = composer.templates();
        let mut rng = StdRng::seed_from_u64(5);

        let with_follow_up = (0..1000)
            .filter(|_| {
                let reply = composer.compose(SentimentCategory::Neutral, false, &[], &mut rng);
                store
                    .follow_up(SentimentCategory::Neutral)
                    .as_slice()
                    .iter()
                    .any(|f| reply.ends_with(f.as_str()))
            })
            .count();
        assert!((350..650).contains(&with_follow_up), "got {}", with_follow_up);
    }
}
