//! Configuration management for EmoBot
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (EMOBOT_ prefix)
//! - A response template file referenced from `dialogue.templates_path`

pub mod constants;
pub mod settings;
pub mod templates;

pub use settings::{
    load_settings, DialogueConfig, ObservabilityConfig, RuntimeEnvironment, ServerConfig,
    Settings,
};
pub use templates::{CategoryTemplates, GreetingTemplates, TemplatesConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
