//! Greeting detection

use emobot_config::constants::greeting::KEYWORDS;

/// True if any token equals a greeting keyword, ignoring case
pub fn is_greeting<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|token| {
        let token = token.as_ref();
        KEYWORDS.iter().any(|keyword| token.eq_ignore_ascii_case(keyword))
    })
}
