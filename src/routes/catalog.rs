//! Catalog routes
//!
//! Each handler reads the session once and hands the credentials to the
//! catalog layer. Failed fetches go through [`settle`].

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::models::{CatalogItem, Channel, Season, SourceKind};
use crate::routes::{require_session, settle, ApiError};
use crate::services::{catalog, m3u_parser, xtream::XtreamClient};
use crate::AppState;

/// GET /api/live
pub async fn get_live(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Channel>>, ApiError> {
    let session = require_session(&state).await?;
    let creds = session.credentials;

    let result = match session.source_kind {
        SourceKind::Playlist => m3u_parser::fetch_playlist(&state.http, &creds.server).await,
        SourceKind::Api => {
            let client = XtreamClient::new(state.http.clone(), &creds);
            catalog::fetch_live_channels(&client).await.map(|streams| {
                streams
                    .into_iter()
                    .map(|raw| catalog::live_channel(raw, &creds))
                    .collect::<Vec<_>>()
            })
        }
    };

    Ok(Json(settle(&state, result, "live channels")?))
}

/// GET /api/movies
pub async fn get_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let session = require_session(&state).await?;
    if session.source_kind == SourceKind::Playlist {
        tracing::debug!("Playlist sources have no movie catalog");
        return Ok(Json(Vec::new()));
    }

    let client = XtreamClient::new(state.http.clone(), &session.credentials);
    let result = catalog::fetch_movies(&client)
        .await
        .map(|movies| movies.into_iter().map(catalog::movie_item).collect::<Vec<_>>());

    Ok(Json(settle(&state, result, "movies")?))
}

/// GET /api/series
pub async fn get_series(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let session = require_session(&state).await?;
    if session.source_kind == SourceKind::Playlist {
        tracing::debug!("Playlist sources have no series catalog");
        return Ok(Json(Vec::new()));
    }

    let client = XtreamClient::new(state.http.clone(), &session.credentials);
    let result = catalog::fetch_series(&client)
        .await
        .map(|series| series.into_iter().map(catalog::series_item).collect::<Vec<_>>());

    Ok(Json(settle(&state, result, "series")?))
}

/// GET /api/series/:series_id/episodes
pub async fn get_episodes(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<i64>,
) -> Result<Json<Vec<Season>>, ApiError> {
    let session = require_session(&state).await?;
    if session.source_kind == SourceKind::Playlist {
        return Ok(Json(Vec::new()));
    }

    let client = XtreamClient::new(state.http.clone(), &session.credentials);
    let result = catalog::fetch_episodes(&client, series_id).await;

    Ok(Json(settle(&state, result, "episodes")?))
}
