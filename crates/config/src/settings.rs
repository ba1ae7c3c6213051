//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::server;
use crate::{ConfigError, TemplatesConfig};

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Dialogue policy configuration
    #[serde(default)]
    pub dialogue: DialogueConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_dialogue()?;
        Ok(())
    }

    /// Validate and keep the resolved template tables
    ///
    /// The templates file is read once here; later
    /// [`DialogueConfig::templates`] calls return the kept tables.
    pub fn resolve(mut self) -> Result<Self, ConfigError> {
        self.validate_server()?;
        let templates = self.validate_dialogue()?;
        self.dialogue.resolved = Some(templates);
        Ok(self)
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if server.max_sessions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_sessions".to_string(),
                message: "Max sessions must be at least 1".to_string(),
            });
        }

        if server.session_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.session_timeout_secs".to_string(),
                message: "Session timeout must be at least 1 second".to_string(),
            });
        }

        if server.cleanup_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.cleanup_interval_secs".to_string(),
                message: "Cleanup interval must be at least 1 second".to_string(),
            });
        }

        if self.environment.is_production() && server.cors_enabled && server.cors_origins.is_empty()
        {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 This may block legitimate requests."
            );
        }

        Ok(())
    }

    fn validate_dialogue(&self) -> Result<TemplatesConfig, ConfigError> {
        if self.environment.is_strict() && self.dialogue.rng_seed.is_some() {
            tracing::warn!(
                "dialogue.rng_seed is set in a {:?} environment; every session will \
                 produce the same reply sequence",
                self.environment
            );
        }

        // Resolving the tables validates them; a bad file is fatal at start-up
        self.dialogue.templates()
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum concurrent conversations
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Idle seconds before a conversation expires
    #[serde(default = "default_session_timeout")]
    pub session_timeout_secs: u64,

    /// Seconds between expired-session sweeps
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    server::DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    server::DEFAULT_PORT
}
fn default_max_sessions() -> usize {
    server::DEFAULT_MAX_SESSIONS
}
fn default_session_timeout() -> u64 {
    server::DEFAULT_SESSION_TIMEOUT_SECS
}
fn default_cleanup_interval() -> u64 {
    server::DEFAULT_CLEANUP_INTERVAL_SECS
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_sessions: default_max_sessions(),
            session_timeout_secs: default_session_timeout(),
            cleanup_interval_secs: default_cleanup_interval(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Expose Prometheus metrics at /metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Dialogue policy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DialogueConfig {
    /// YAML file with response templates (built-in templates when unset)
    #[serde(default)]
    pub templates_path: Option<String>,

    /// Fixed seed for every conversation's RNG (entropy-seeded when unset)
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// Tables kept by [`Settings::resolve`]
    #[serde(skip)]
    resolved: Option<TemplatesConfig>,
}

impl DialogueConfig {
    /// Template tables, read and validated unless already resolved
    pub fn templates(&self) -> Result<TemplatesConfig, ConfigError> {
        if let Some(templates) = &self.resolved {
            return Ok(templates.clone());
        }

        match &self.templates_path {
            Some(path) => TemplatesConfig::load(path),
            None => {
                let templates = TemplatesConfig::default();
                templates.validate()?;
                Ok(templates)
            }
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (EMOBOT_ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("EMOBOT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.resolve()
}
