pub mod catalog;
pub mod health;
pub mod play;
pub mod session;

use axum::{http::StatusCode, Json};

use crate::models::{ErrorBody, Session};
use crate::services::catalog::or_empty;
use crate::services::xtream::XtreamError;
use crate::AppState;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

/// Load the session once for the current request
pub async fn require_session(state: &AppState) -> Result<Session, ApiError> {
    state
        .sessions
        .load()
        .await
        .map_err(|e| {
            tracing::error!("Session store error: {}", e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Session store error")
        })?
        .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, "Not logged in"))
}

/// Apply the configured fetch error policy
pub fn settle<T>(
    state: &AppState,
    result: Result<Vec<T>, XtreamError>,
    what: &str,
) -> Result<Vec<T>, ApiError> {
    if state.config.strict_fetch_errors {
        result.map_err(|e| {
            tracing::warn!("Failed to fetch {}: {}", what, e);
            api_error(StatusCode::BAD_GATEWAY, format!("Provider error: {}", e))
        })
    } else {
        Ok(or_empty(result, what))
    }
}
