//! Centralized constants for the dialogue policy
//!
//! Single source of truth for thresholds and fixed strings used by the
//! policy engine and the binaries.

/// Polarity cut-offs for sentiment categorization
///
/// Both bounds are exclusive: exactly `POSITIVE` or `NEGATIVE` is neutral.
pub mod polarity {
    /// Scores strictly above this are positive
    pub const POSITIVE: f64 = 0.3;

    /// Scores strictly below this are negative
    pub const NEGATIVE: f64 = -0.3;

    /// Substituted when the polarity scorer fails
    pub const FALLBACK: f64 = 0.0;
}

/// Response composition
pub mod composition {
    /// A uniform draw must be strictly greater than this to add a follow-up
    pub const FOLLOW_UP_THRESHOLD: f64 = 0.5;

    /// Sentence appended when the message mentions a named entity
    pub const ENTITY_MENTION_PREFIX: &str = "By the way, I noticed you mentioned ";
}

/// Greeting detection
pub mod greeting {
    /// Tokens that mark a message as a greeting (compared case-insensitively)
    pub const KEYWORDS: [&str; 3] = ["hi", "hello", "hey"];
}

/// Fixed user-facing strings
pub mod messages {
    /// Returned for empty or whitespace-only input
    pub const EMPTY_INPUT_PROMPT: &str = "Please type something...";

    /// Display name of the bot
    pub const BOT_NAME: &str = "EmoBot";

    /// Keyword that ends a terminal chat
    pub const EXIT_COMMAND: &str = "exit chat";

    /// Printed when a terminal chat ends
    pub const FAREWELL: &str = "Goodbye!";
}

/// Server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_MAX_SESSIONS: usize = 1000;
    /// Idle time before a session is dropped (1 hour)
    pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 3600;
    /// Interval of the expired-session sweep (5 minutes)
    pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;
}
