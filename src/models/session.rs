use serde::{Deserialize, Serialize};

/// Provider credentials as entered at login
///
/// Never validated by the catalog layer; `server` may or may not end with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub server: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Server URL without trailing slashes, ready for path joins
    pub fn base(&self) -> &str {
        self.server.trim_end_matches('/')
    }
}

/// How the catalog for a session is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `server` is itself an M3U playlist URL
    Playlist,
    /// `server` is an Xtream Codes base URL serving `player_api.php`
    Api,
}

impl SourceKind {
    /// Classify a server string. Anything mentioning `m3u` or `get.php`
    /// is fetched as a playlist; everything else goes through the player API.
    pub fn detect(server: &str) -> Self {
        if server.contains("m3u") || server.contains("get.php") {
            SourceKind::Playlist
        } else {
            SourceKind::Api
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Playlist => write!(f, "playlist"),
            SourceKind::Api => write!(f, "api"),
        }
    }
}

/// Persisted login: the only state kept between requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub credentials: Credentials,
    pub source_kind: SourceKind,
    pub created_at: i64,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        let source_kind = SourceKind::detect(&credentials.server);
        Self {
            credentials,
            source_kind,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub server: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Session as exposed to the front-end (no password)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub server: String,
    pub username: String,
    pub source_kind: SourceKind,
    pub created_at: i64,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            server: session.credentials.server.clone(),
            username: session.credentials.username.clone(),
            source_kind: session.source_kind,
            created_at: session.created_at,
        }
    }
}

/// Generic API error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(server: &str) -> Credentials {
        Credentials {
            server: server.to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
        }
    }

    #[test]
    fn test_detect_playlist_sources() {
        assert_eq!(
            SourceKind::detect("http://example.com/list.m3u"),
            SourceKind::Playlist
        );
        assert_eq!(
            SourceKind::detect("http://example.com/list.m3u8"),
            SourceKind::Playlist
        );
        assert_eq!(
            SourceKind::detect("http://example.com:8080/get.php?username=a&password=b&type=m3u_plus"),
            SourceKind::Playlist
        );
    }

    #[test]
    fn test_detect_api_source() {
        assert_eq!(SourceKind::detect("http://example.com:8080"), SourceKind::Api);
        assert_eq!(SourceKind::detect("https://provider.tv/"), SourceKind::Api);
    }

    #[test]
    fn test_base_strips_trailing_slash() {
        assert_eq!(creds("http://h:80/").base(), "http://h:80");
        assert_eq!(creds("http://h:80").base(), "http://h:80");
    }

    #[test]
    fn test_session_decides_source_kind_once() {
        let session = Session::new(creds("http://h/playlist.m3u"));
        assert_eq!(session.source_kind, SourceKind::Playlist);

        let summary = SessionSummary::from(&session);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["sourceKind"], "playlist");
        assert!(json.get("password").is_none());
    }
}
