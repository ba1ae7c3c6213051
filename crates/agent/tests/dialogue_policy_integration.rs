//! Integration tests for the dialogue policy
//!
//! Exercise the public surface end to end with configured templates.

use std::sync::Arc;

use chrono::{Duration, Utc};
use emobot_agent::{Conversation, DialoguePolicy, ResponseTemplateStore};
use emobot_config::{CategoryTemplates, GreetingTemplates, TemplatesConfig};
use emobot_core::{Entity, SentimentCategory};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn single(s: &str) -> Vec<String> {
    vec![s.to_string()]
}

/// One template per table so replies are fully predictable
fn fixed_templates() -> Arc<ResponseTemplateStore> {
    let config = TemplatesConfig {
        responses: CategoryTemplates {
            positive: single("POS"),
            negative: single("NEG"),
            neutral: single("NEU"),
        },
        follow_ups: CategoryTemplates {
            positive: single("pos-follow?"),
            negative: single("neg-follow?"),
            neutral: single("neu-follow?"),
        },
        greetings: GreetingTemplates {
            openers: single("Hi! "),
            continuations: single("How are you?"),
        },
    };
    Arc::new(ResponseTemplateStore::new(&config).unwrap())
}

#[test]
fn test_memory_grows_by_one_per_non_empty_message() {
    let mut policy = DialoguePolicy::new(fixed_templates());
    let mut rng = StdRng::seed_from_u64(3);
    let start = Utc::now();

    let turns: [(&str, f64); 4] = [
        ("great day", 0.9),
        ("", 0.9),
        ("bad day", -0.9),
        ("   ", -0.9),
    ];

    let mut expected = 0;
    for (i, (text, polarity)) in turns.iter().enumerate() {
        let now = start + Duration::seconds(i as i64);
        let tokens: Vec<&str> = text.split_whitespace().collect();
        policy.process_message(text, *polarity, &tokens, &[], now, &mut rng);

        if !text.trim().is_empty() {
            expected += 1;
            let last = policy.memory().last().unwrap();
            assert_eq!(last.text(), *text);
            assert_eq!(last.timestamp(), now);
        }
        assert_eq!(policy.memory().len(), expected);
    }

    let sentiments: Vec<SentimentCategory> =
        policy.memory().all().iter().map(|r| r.sentiment()).collect();
    assert_eq!(sentiments, vec![SentimentCategory::Positive, SentimentCategory::Negative]);
}

#[test]
fn test_exact_composition_without_follow_up() {
    let mut policy = DialoguePolicy::new(fixed_templates());
    let mut rng = StepRng::new(0, 0);

    let reply = policy.process_message(
        "Hey, I met Alice in Rome",
        0.0,
        &["hey", ",", "i", "met", "alice", "in", "rome"],
        &[Entity::new("Alice", "PERSON"), Entity::new("Rome", "GPE")],
        Utc::now(),
        &mut rng,
    );

    assert_eq!(reply, "Hi! How are you? NEU By the way, I noticed you mentioned Alice.");
}

#[test]
fn test_exact_composition_with_follow_up() {
    let mut policy = DialoguePolicy::new(fixed_templates());
    // Roll near 1.0, always index 0
    let mut rng = StepRng::new(0xFFFF_FFFF_0000_0000, 0);

    let reply = policy.process_message("this is bad", -0.5, &["this", "is", "bad"], &[], Utc::now(), &mut rng);
    assert_eq!(reply, "NEG neg-follow?");
}

#[test]
fn test_entity_mention_iff_entities_present() {
    let mut policy = DialoguePolicy::new(fixed_templates());
    let mut rng = StdRng::seed_from_u64(8);

    for i in 0..20 {
        let entities = if i % 2 == 0 {
            vec![Entity::new(format!("Place{}", i), "GPE")]
        } else {
            Vec::new()
        };
        let reply = policy.process_message("text", 0.0, &["text"], &entities, Utc::now(), &mut rng);

        match entities.first() {
            Some(entity) => assert!(reply.ends_with(&format!("mentioned {}.", entity.text))),
            None => assert!(!reply.contains("By the way")),
        }
    }
}

#[test]
fn test_conversation_greeting_and_history() {
    let mut conversation = Conversation::new("session-1", fixed_templates(), Some(10));
    assert_eq!(conversation.greet(), "Hi! How are you?");

    let now = Utc::now();
    let reply = conversation.process_message("hello", 0.5, &["hello"], &[], now);
    assert!(reply.starts_with("Hi! How are you? POS"));
    assert_eq!(conversation.history().len(), 1);
    assert_eq!(conversation.history()[0].timestamp(), now);
    assert_eq!(conversation.id(), "session-1");
}
