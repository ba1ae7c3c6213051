//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use emobot_agent::{ResponseTemplateStore, SignalExtractor};
use emobot_config::Settings;
use emobot_text_processing::{CapitalizedSpanExtractor, LexiconSentimentScorer, WordTokenizer};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::session::SessionManager;
use crate::ServerError;

/// Signal extractor backed by the built-in heuristics
pub fn default_signal_extractor() -> SignalExtractor {
    SignalExtractor::new(
        Arc::new(LexiconSentimentScorer::new()),
        Arc::new(WordTokenizer::new()),
        Arc::new(CapitalizedSpanExtractor::new()),
    )
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    /// Session manager
    pub sessions: Arc<SessionManager>,
    /// NLP collaborators shared by all sessions
    pub signals: SignalExtractor,
    /// Prometheus handle, `None` when metrics are disabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from settings, loading the template tables
    pub fn new(config: Settings) -> Result<Self, ServerError> {
        let templates = Arc::new(ResponseTemplateStore::new(&config.dialogue.templates()?)?);
        Ok(Self::with_templates(config, templates))
    }

    /// Build state around already-loaded templates
    pub fn with_templates(config: Settings, templates: Arc<ResponseTemplateStore>) -> Self {
        let sessions = SessionManager::from_settings(templates, &config.server)
            .with_seed(config.dialogue.rng_seed);

        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            signals: default_signal_extractor(),
            metrics: None,
        }
    }

    /// Replace the NLP collaborators
    pub fn with_signals(mut self, signals: SignalExtractor) -> Self {
        self.signals = signals;
        self
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}
