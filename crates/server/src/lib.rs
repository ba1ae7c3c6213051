//! EmoBot Server
//!
//! HTTP endpoints over per-session EmoBot conversations.

pub mod http;
pub mod metrics;
pub mod session;
pub mod state;

pub use http::create_router;
pub use metrics::{init_metrics, record_error, record_reply, record_request};
pub use session::{Session, SessionManager};
pub use state::{default_signal_extractor, AppState};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Session error: {0}")]
    Session(String),

    #[error("Session limit reached ({0})")]
    SessionLimit(usize),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<emobot_config::ConfigError> for ServerError {
    fn from(err: emobot_config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<emobot_agent::AgentError> for ServerError {
    fn from(err: emobot_agent::AgentError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::Session(_) => StatusCode::NOT_FOUND,
            ServerError::SessionLimit(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = StatusCode::from(self);
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(StatusCode::from(ServerError::Session("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(StatusCode::from(ServerError::SessionLimit(2)), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            StatusCode::from(ServerError::Config("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
