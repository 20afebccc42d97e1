//! Xtream Codes Integration
//!
//! Client and response types for the Xtream Codes Player API.
//!
//! # Endpoints used
//!
//! ```text
//! {server}/player_api.php?username=U&password=P                      account info
//! {server}/player_api.php?username=U&password=P&action=get_live_streams
//! {server}/player_api.php?username=U&password=P&action=get_vod_streams
//! {server}/player_api.php?username=U&password=P&action=get_series
//! {server}/player_api.php?username=U&password=P&action=get_series_info&series_id=S
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::services::xtream::XtreamClient;
//!
//! let client = XtreamClient::new(http.clone(), &session.credentials);
//! let movies = client.get_vod_streams().await?;
//! ```

pub mod client;
pub mod types;

// Re-exports for convenience
pub use client::{XtreamClient, XtreamError};
pub use types::{XtreamEpisode, XtreamLiveStream, XtreamSeries, XtreamVodStream};
