use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Session
    pub session_file: String,

    // Provider access
    pub user_agent: String,
    pub fetch_timeout_ms: Option<u64>,
    pub validate_login: bool,

    // Error policy: false renders failed fetches as empty lists
    pub strict_fetch_errors: bool,
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),

            // Session
            session_file: env::var("SESSION_FILE")
                .unwrap_or_else(|_| ".streamvue/session.json".to_string()),

            // Misc - Use VLC user agent to avoid IPTV server blocks
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| "VLC/3.0.20 LibVLC/3.0.20".to_string()),

            // Unset: transport defaults
            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok()),

            validate_login: env_flag("VALIDATE_LOGIN", true),
            strict_fetch_errors: env_flag("STRICT_FETCH_ERRORS", false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            session_file: ".streamvue/session.json".to_string(),
            user_agent: "VLC/3.0.20 LibVLC/3.0.20".to_string(),
            fetch_timeout_ms: None,
            validate_login: true,
            strict_fetch_errors: false,
        }
    }
}
