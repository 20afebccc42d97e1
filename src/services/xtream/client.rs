//! Xtream Codes API Client
//!
//! HTTP client for the Xtream Codes Player API catalog endpoints.

use super::types::*;
use crate::models::Credentials;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Xtream API Client
///
/// Borrows a shared `reqwest::Client`; one instance per set of credentials.
pub struct XtreamClient {
    http: Client,
    base_url: String,
}

impl XtreamClient {
    /// Create a new Xtream client
    ///
    /// # Arguments
    /// * `http` - Shared HTTP client
    /// * `creds` - Provider credentials; `server` may carry a trailing slash
    pub fn new(http: Client, creds: &Credentials) -> Self {
        let base_url = format!(
            "{}/player_api.php?username={}&password={}",
            creds.base(),
            creds.username,
            creds.password
        );

        Self { http, base_url }
    }

    /// Make a GET request with optional action parameter
    ///
    /// An empty or `null` body decodes as `T::default()`.
    async fn get<T: DeserializeOwned + Default>(&self, action: &str) -> Result<T, XtreamError> {
        let url = if action.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}&action={}", self.base_url, action)
        };

        debug!("Xtream API request: {}", action);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| XtreamError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(XtreamError::Http(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| XtreamError::Network(e.to_string()))?;

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(T::default());
        }

        serde_json::from_str(trimmed).map_err(|e| {
            error!(
                "Failed to parse Xtream response for action '{}': {}",
                action, e
            );
            debug!("Response text: {}", truncate(trimmed, 500));
            XtreamError::Parse(e.to_string())
        })
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Get account info (user_info)
    pub async fn get_auth(&self) -> Result<XtreamAuthResponse, XtreamError> {
        self.get("").await
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Get all live streams
    pub async fn get_live_streams(&self) -> Result<Vec<XtreamLiveStream>, XtreamError> {
        self.get("get_live_streams").await
    }

    /// Get all VOD streams
    pub async fn get_vod_streams(&self) -> Result<Vec<XtreamVodStream>, XtreamError> {
        self.get("get_vod_streams").await
    }

    /// Get all series
    pub async fn get_series(&self) -> Result<Vec<XtreamSeries>, XtreamError> {
        self.get("get_series").await
    }

    /// Get series info with episodes grouped by season
    pub async fn get_series_info(&self, series_id: i64) -> Result<XtreamSeriesInfo, XtreamError> {
        self.get(&format!("get_series_info&series_id={}", series_id))
            .await
    }
}

/// Cut a body for logging without splitting a UTF-8 sequence
fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Xtream API Error types
#[derive(Debug, thiserror::Error)]
pub enum XtreamError {
    /// Network/connection error
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}
