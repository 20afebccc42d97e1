//! Xtream Codes API Types
//!
//! Raw response records from the Player API. Providers are loose about
//! JSON types (ids arrive as numbers or strings, optional fields as `null`),
//! so numeric ids and free-text fields are decoded leniently.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Lenient decoders
// ============================================================================

/// Integral id from a number or numeric string; fractions and junk are `None`
fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accept `42` or `"42"`; anything unusable decodes as 0 so one bad record
/// does not sink the whole list
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value).unwrap_or(0))
}

fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value))
}

/// Accept strings, numbers and booleans as text; everything else is `None`
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

// ============================================================================
// Authentication Response Types
// ============================================================================

/// Response from player_api.php without an action
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamAuthResponse {
    #[serde(default)]
    pub user_info: XtreamUserInfo,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamUserInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub exp_date: Option<String>,
    /// Some panels answer bad credentials with `{"user_info":{"auth":0}}`
    #[serde(default, deserialize_with = "lenient_string")]
    pub auth: Option<String>,
}

impl XtreamUserInfo {
    /// Check if account is active
    pub fn is_active(&self) -> bool {
        self.auth.as_deref() != Some("0")
            && self
                .status
                .as_deref()
                .map(|s| s.eq_ignore_ascii_case("active"))
                .unwrap_or(false)
    }
}

// ============================================================================
// Live Stream Types
// ============================================================================

/// Record from `get_live_streams`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamLiveStream {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stream_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stream_icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stream_type: Option<String>,
}

// ============================================================================
// VOD Types
// ============================================================================

/// Record from `get_vod_streams`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamVodStream {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stream_id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stream_icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub added: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub container_extension: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub direct_source: Option<String>,
    /// Occasionally carries a playback token
    #[serde(default, deserialize_with = "lenient_string")]
    pub custom_sid: Option<String>,
}

// ============================================================================
// Series Types
// ============================================================================

/// Record from `get_series`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamSeries {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub series_id: Option<i64>,
    /// Older panels key series by `stream_id`
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub stream_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stream_icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub added: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub container_extension: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub custom_sid: Option<String>,
}

/// Response from `get_series_info`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct XtreamSeriesInfo {
    /// Episodes keyed by season number, in the order the provider sent them
    #[serde(default, deserialize_with = "episodes_map")]
    pub episodes: IndexMap<String, Vec<XtreamEpisode>>,
}

/// `episodes` is normally a map; a few panels send `[]` or `null` when empty
fn episodes_map<'de, D>(deserializer: D) -> Result<IndexMap<String, Vec<XtreamEpisode>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeMap {
        Map(IndexMap<String, Vec<XtreamEpisode>>),
        Other(Value),
    }

    match MaybeMap::deserialize(deserializer)? {
        MaybeMap::Map(map) => Ok(map),
        MaybeMap::Other(Value::Null) => Ok(IndexMap::new()),
        MaybeMap::Other(Value::Array(a)) if a.is_empty() => Ok(IndexMap::new()),
        MaybeMap::Other(other) => Err(serde::de::Error::custom(format!(
            "unexpected episodes value: {}",
            other
        ))),
    }
}

/// Episode record inside `get_series_info`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct XtreamEpisode {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub container_extension: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub custom_sid: Option<String>,
}
