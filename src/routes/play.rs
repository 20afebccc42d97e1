use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::{CatalogItem, Channel, Episode};
use crate::routes::{require_session, ApiError};
use crate::services::resolver;
use crate::AppState;

/// Item selected in the front-end
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayRequest {
    Live { channel: Channel },
    Movie { item: CatalogItem },
    Episode { episode: Episode },
}

/// What the player needs to start playback
#[derive(Debug, Serialize)]
pub struct PlayUrlResponse {
    pub url: String,
    pub title: String,
}

/// POST /api/play
pub async fn play_url(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlayRequest>,
) -> Result<Json<PlayUrlResponse>, ApiError> {
    let session = require_session(&state).await?;
    let creds = &session.credentials;

    // Live URLs are fixed when the catalog is built
    let response = match req {
        PlayRequest::Live { channel } => PlayUrlResponse {
            url: channel.url,
            title: channel.name,
        },
        PlayRequest::Movie { item } => PlayUrlResponse {
            url: resolver::movie_url(&item, creds),
            title: item.name,
        },
        PlayRequest::Episode { episode } => PlayUrlResponse {
            url: resolver::episode_url(&episode, creds),
            title: episode.title,
        },
    };

    tracing::debug!("Resolved playback for {}", response.title);
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::routes::test_support::{app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_play_resolves_with_session_credentials() {
        let (app, _dir) = app(Config {
            validate_login: false,
            ..Config::default()
        });
        send(
            &app,
            "POST",
            "/api/session",
            Some(json!({"server": "http://h:80/", "username": "u", "password": "p"})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/play",
            Some(json!({"type": "movie", "item": {
                "name": "Heat", "logo": "", "year": "N/A", "category": "5",
                "streamId": 42, "containerExtension": "mkv", "accessToken": "abc"
            }})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "http://h:80/movie/u/p/42.mkv?token=abc");
        assert_eq!(body["title"], "Heat");

        let (_, body) = send(
            &app,
            "POST",
            "/api/play",
            Some(json!({"type": "episode", "episode": {
                "id": 1001, "title": "Pilot", "containerExtension": ""
            }})),
        )
        .await;
        assert_eq!(body["url"], "http://h:80/series/u/p/1001.mp4");
    }

    #[tokio::test]
    async fn test_play_live_echoes_channel_url() {
        let (app, _dir) = app(Config {
            validate_login: false,
            ..Config::default()
        });
        send(
            &app,
            "POST",
            "/api/session",
            Some(json!({"server": "http://h:80", "username": "u", "password": "p"})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/play",
            Some(json!({"type": "live", "channel": {
                "name": "CNN", "group": "News", "logo": "",
                "url": "http://h:80/live/u/p/101.ts"
            }})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "http://h:80/live/u/p/101.ts");
        assert_eq!(body["title"], "CNN");
    }

    #[tokio::test]
    async fn test_play_requires_session() {
        let (app, _dir) = app(Config::default());

        let (status, _) = send(
            &app,
            "POST",
            "/api/play",
            Some(json!({"type": "live", "channel": {
                "name": "CNN", "group": "News", "logo": "", "url": "http://s/1"
            }})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
