//! Catalog fetchers and normalization
//!
//! Thin layer over [`XtreamClient`]: one fetch per content type, plus the
//! mapping from raw Xtream records to the records the front-end renders.

use tracing::{error, info};

use crate::models::{
    name_or_unknown, year_from_added, CatalogItem, Channel, Credentials, Episode, Season,
    DEFAULT_GROUP,
};
use crate::services::resolver;
use crate::services::xtream::{
    XtreamClient, XtreamEpisode, XtreamError, XtreamLiveStream, XtreamSeries, XtreamVodStream,
};

// ============================================================================
// Fetchers
// ============================================================================

pub async fn fetch_live_channels(
    client: &XtreamClient,
) -> Result<Vec<XtreamLiveStream>, XtreamError> {
    let streams = client.get_live_streams().await.map_err(|e| {
        error!("Failed to fetch Xtream live streams: {}", e);
        e
    })?;
    info!("Fetched {} live streams", streams.len());
    Ok(streams)
}

pub async fn fetch_movies(client: &XtreamClient) -> Result<Vec<XtreamVodStream>, XtreamError> {
    let movies = client.get_vod_streams().await.map_err(|e| {
        error!("Failed to fetch Xtream movies: {}", e);
        e
    })?;
    info!("Fetched {} movies", movies.len());
    Ok(movies)
}

pub async fn fetch_series(client: &XtreamClient) -> Result<Vec<XtreamSeries>, XtreamError> {
    let series = client.get_series().await.map_err(|e| {
        error!("Failed to fetch Xtream series: {}", e);
        e
    })?;
    info!("Fetched {} series", series.len());
    Ok(series)
}

/// Fetch a series' episodes grouped by season
///
/// Seasons keep the provider's key order; no sorting is applied.
pub async fn fetch_episodes(
    client: &XtreamClient,
    series_id: i64,
) -> Result<Vec<Season>, XtreamError> {
    let info = client.get_series_info(series_id).await.map_err(|e| {
        error!("Error fetching episodes for series {}: {}", series_id, e);
        e
    })?;

    Ok(info
        .episodes
        .into_iter()
        .map(|(season_number, episodes)| Season {
            season_number,
            episodes: episodes.into_iter().map(episode).collect(),
        })
        .collect())
}

/// Collapse a failed fetch into an empty list
///
/// The error has already been logged by the fetcher; callers that need to
/// tell "nothing there" from "fetch failed" should match on the `Result`.
pub fn or_empty<T>(result: Result<Vec<T>, XtreamError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        info!("Rendering empty {} list after fetch error: {}", what, e);
        Vec::new()
    })
}

// ============================================================================
// Normalization
// ============================================================================

pub fn live_channel(raw: XtreamLiveStream, creds: &Credentials) -> Channel {
    Channel {
        url: resolver::live_url(creds, raw.stream_id),
        name: name_or_unknown(raw.name),
        group: raw.category_id.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        logo: raw.stream_icon.unwrap_or_default(),
    }
}

pub fn movie_item(raw: XtreamVodStream) -> CatalogItem {
    CatalogItem {
        year: year_from_added(raw.added.as_deref()),
        name: name_or_unknown(raw.name),
        logo: raw.stream_icon.unwrap_or_default(),
        category: raw.category_id.unwrap_or_default(),
        stream_id: raw.stream_id,
        container_extension: raw.container_extension,
        direct_source: raw.direct_source,
        access_token: raw.custom_sid,
    }
}

pub fn series_item(raw: XtreamSeries) -> CatalogItem {
    CatalogItem {
        year: year_from_added(raw.added.as_deref()),
        name: name_or_unknown(raw.name),
        logo: raw.stream_icon.or(raw.cover).unwrap_or_default(),
        category: raw.category_id.unwrap_or_default(),
        stream_id: raw.series_id.or(raw.stream_id).unwrap_or(0),
        container_extension: raw.container_extension,
        direct_source: None,
        access_token: raw.custom_sid,
    }
}

fn episode(raw: XtreamEpisode) -> Episode {
    Episode {
        id: raw.id,
        title: name_or_unknown(raw.title),
        container_extension: raw.container_extension.unwrap_or_default(),
        access_token: raw.custom_sid,
    }
}
