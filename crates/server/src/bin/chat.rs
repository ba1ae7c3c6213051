//! Interactive terminal chat with EmoBot
//!
//! Type `exit chat` to leave.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use emobot_agent::{Conversation, ResponseTemplateStore};
use emobot_config::constants::messages::{EXIT_COMMAND, FAREWELL};
use emobot_config::load_settings;
use emobot_server::default_signal_extractor;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the chat
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let env = std::env::var("EMOBOT_ENV").ok();
    let settings = load_settings(env.as_deref()).context("Failed to load configuration")?;
    let templates = ResponseTemplateStore::new(&settings.dialogue.templates()?)?;

    let signals = default_signal_extractor();
    let mut conversation = Conversation::new("terminal", Arc::new(templates), settings.dialogue.rng_seed);
    let bot = conversation.bot_name();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Welcome to {}!", bot)?;
    writeln!(out, "This chatbot can understand your feelings and respond accordingly.")?;
    writeln!(out, "{}: {}", bot, conversation.greet())?;
    writeln!(out, "Type '{}' to stop the chat.", EXIT_COMMAND)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            writeln!(out, "{}: {}", bot, FAREWELL)?;
            break;
        };
        let line = line?;

        if line.trim() == EXIT_COMMAND {
            writeln!(out, "{}: {}", bot, FAREWELL)?;
            break;
        }

        let reply = conversation.respond(&line, &signals, Utc::now());
        writeln!(out, "{}: {}", bot, reply)?;
    }

    Ok(())
}
