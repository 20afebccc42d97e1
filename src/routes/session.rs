use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::models::{Credentials, LoginRequest, Session, SessionSummary, SourceKind};
use crate::routes::{api_error, require_session, ApiError};
use crate::services::xtream::XtreamClient;
use crate::AppState;

/// POST /api/session
///
/// Decides the source kind once and stores the session. API sources are
/// checked against the provider first when `VALIDATE_LOGIN` is on.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionSummary>, ApiError> {
    let server = req.server.trim();
    if server.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Server is required"));
    }

    let session = Session::new(Credentials {
        server: server.to_string(),
        username: req.username,
        password: req.password,
    });

    if session.source_kind == SourceKind::Api && state.config.validate_login {
        let client = XtreamClient::new(state.http.clone(), &session.credentials);
        let auth = client.get_auth().await.map_err(|e| {
            tracing::warn!("Login check failed for {}: {}", session.credentials.server, e);
            api_error(StatusCode::BAD_GATEWAY, format!("Could not verify account: {}", e))
        })?;

        if !auth.user_info.is_active() {
            return Err(api_error(
                StatusCode::UNAUTHORIZED,
                format!(
                    "Account not active. Status: {}",
                    auth.user_info.status.as_deref().unwrap_or("unknown")
                ),
            ));
        }
    }

    state.sessions.save(&session).await.map_err(|e| {
        tracing::error!("Failed to save session: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save session")
    })?;

    Ok(Json(SessionSummary::from(&session)))
}

/// GET /api/session
pub async fn current(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionSummary>, ApiError> {
    let session = require_session(&state).await?;
    Ok(Json(SessionSummary::from(&session)))
}

/// DELETE /api/session
pub async fn logout(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.sessions.clear().await.map_err(|e| {
        tracing::error!("Failed to clear session: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear session")
    })?;
    Ok(StatusCode::NO_CONTENT)
}
