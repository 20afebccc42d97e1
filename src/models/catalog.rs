use serde::{Deserialize, Serialize};

/// Category label used when a channel carries no group
pub const DEFAULT_GROUP: &str = "Others";

/// Placeholder for records that arrive without a name
pub const UNKNOWN_NAME: &str = "Unknown";

/// Year label for catalog items without an `added` timestamp
pub const UNKNOWN_YEAR: &str = "N/A";

/// Default container when the provider omits one
pub const DEFAULT_EXTENSION: &str = "mp4";

/// Live channel, either parsed from an M3U playlist or normalized
/// from a `get_live_streams` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub name: String,
    pub group: String,
    pub logo: String,
    pub url: String,
}

/// Movie or series prior to URL resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,
    pub logo: String,
    pub year: String,
    pub category: String,
    pub stream_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Episodes of one season, in provider order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub season_number: String,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: i64,
    pub title: String,
    pub container_extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Date portion of an Xtream `added` value ("2023-01-05 10:00:00" -> "2023-01-05")
///
/// Providers also send unix timestamps here; those pass through unchanged.
pub fn year_from_added(added: Option<&str>) -> String {
    added
        .and_then(|a| a.split(' ').next())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// Substitute the placeholder for absent or blank names
pub fn name_or_unknown(name: Option<String>) -> String {
    name.filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}
