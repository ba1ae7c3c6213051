//! Named entities produced by an external recognizer

use serde::{Deserialize, Serialize};

/// A named span of text with its label (e.g. "Paris", "GPE")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface text of the span
    pub text: String,
    /// Recognizer label
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}
