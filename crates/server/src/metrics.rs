//! Prometheus Metrics
//!
//! Counters for requests, replies per sentiment category and errors.
//! Recording is a no-op until [`init_metrics`] installs the recorder.

use axum::extract::State;
use axum::http::StatusCode;
use emobot_core::SentimentCategory;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::state::AppState;

/// Install the global Prometheus recorder
///
/// Returns `None` if a recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            None
        }
    }
}

/// Count an HTTP request by endpoint
pub fn record_request(endpoint: &'static str) {
    metrics::counter!("emobot_requests_total", "endpoint" => endpoint).increment(1);
}

/// Count a reply by the message's sentiment category
pub fn record_reply(category: SentimentCategory) {
    metrics::counter!("emobot_replies_total", "category" => category.as_str()).increment(1);
}

/// Count an error by kind
pub fn record_error(kind: &'static str) {
    metrics::counter!("emobot_errors_total", "kind" => kind).increment(1);
}

/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or(StatusCode::NOT_FOUND)
}
