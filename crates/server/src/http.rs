//! HTTP Endpoints
//!
//! REST API over EmoBot sessions.

use axum::{
    extract::{Json, Path, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use emobot_core::MemoryRecord;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::metrics::{metrics_handler, record_error, record_reply, record_request};
use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config.server.cors_origins, state.config.server.cors_enabled);

    Router::new()
        // Session endpoints
        .route("/api/sessions", post(create_session).get(list_sessions))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/history", get(session_history))
        // Chat
        .route("/api/chat/:session_id", post(chat))
        // Health and metrics
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build the CORS layer from configured origins
///
/// Disabled CORS is permissive. With no valid origins configured only
/// `http://localhost:3000` is allowed.
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to localhost:3000");
        return layer.allow_origin(HeaderValue::from_static("http://localhost:3000"));
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    layer.allow_origin(parsed_origins)
}

/// Session creation response
#[derive(Debug, Serialize)]
struct CreateSessionResponse {
    session_id: String,
    greeting: String,
}

/// Create a session and greet
async fn create_session(State(state): State<AppState>) -> Result<Json<CreateSessionResponse>, ServerError> {
    record_request("create_session");

    let session = state.sessions.create().map_err(|e| {
        record_error("session_limit");
        e
    })?;
    let greeting = session.conversation().greet();

    Ok(Json(CreateSessionResponse {
        session_id: session.id.clone(),
        greeting,
    }))
}

/// Get session info
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or_else(|| ServerError::Session(format!("Unknown session: {}", id)))?;

    let turn_count = session.conversation().turn_count();
    Ok(Json(serde_json::json!({
        "session_id": session.id,
        "active": session.is_active(),
        "turn_count": turn_count,
        "created_at": session.created_at,
        "idle_secs": session.idle().as_secs(),
    })))
}

/// Delete session
async fn delete_session(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ServerError> {
    if state.sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::Session(format!("Unknown session: {}", id)))
    }
}

/// List sessions
async fn list_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions = state.sessions.list();
    Json(serde_json::json!({
        "sessions": sessions,
        "count": sessions.len(),
    }))
}

/// Session history response
#[derive(Debug, Serialize)]
struct HistoryResponse {
    session_id: String,
    history: Vec<MemoryRecord>,
}

/// Processed messages of a session, oldest first
async fn session_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, ServerError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or_else(|| ServerError::Session(format!("Unknown session: {}", id)))?;

    let history = session.conversation().history().to_vec();
    Ok(Json(HistoryResponse {
        session_id: session.id.clone(),
        history,
    }))
}

/// Chat request; a missing `message` is treated as empty
#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

/// Chat response
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    turn_count: usize,
}

/// Chat endpoint
async fn chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    record_request("chat");

    let session = state.sessions.get(&session_id).ok_or_else(|| {
        record_error("unknown_session");
        ServerError::Session(format!("Unknown session: {}", session_id))
    })?;

    session.touch();

    let mut conversation = session.conversation();
    let before = conversation.turn_count();
    let response = conversation.respond(&request.message, &state.signals, Utc::now());
    let turn_count = conversation.turn_count();

    if turn_count > before {
        if let Some(record) = conversation.history().last() {
            record_reply(record.sentiment());
        }
    }
    drop(conversation);

    Ok(Json(ChatResponse { response, turn_count }))
}

/// Liveness check
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.sessions.count(),
    }))
}
