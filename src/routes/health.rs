use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Root endpoint - basic status
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "StreamVue Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "runtime": "rust"
    }))
}

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    uptime: u64,
    session: bool,
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    // A corrupt session file degrades the service: every catalog call fails
    let (status, session) = match state.sessions.load().await {
        Ok(session) => ("ok", session.is_some()),
        Err(e) => {
            tracing::warn!("Session store unreadable: {}", e);
            ("degraded", false)
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        uptime,
        session,
    })
}

/// Liveness probe
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, "alive")
}
