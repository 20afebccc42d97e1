use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use tracing::{debug, error, info};

use crate::models::{Channel, DEFAULT_GROUP, UNKNOWN_NAME};
use crate::services::xtream::XtreamError;

lazy_static! {
    /// Display name: everything after the last comma of the EXTINF line
    static ref NAME_REGEX: Regex = Regex::new(r",([^,]*)$").unwrap();
    /// tvg-logo="..."
    static ref LOGO_REGEX: Regex = Regex::new(r#"tvg-logo="(.*?)""#).unwrap();
    /// group-title="..."
    static ref GROUP_REGEX: Regex = Regex::new(r#"group-title="(.*?)""#).unwrap();
}

/// Parsed EXTINF line data
#[derive(Debug)]
struct ExtinfData {
    name: String,
    logo: String,
    group: String,
}

fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse an EXTINF line
/// Format: #EXTINF:duration tvg-logo="..." group-title="...",Title
fn parse_extinf(line: &str) -> ExtinfData {
    let name = capture(&NAME_REGEX, line)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    ExtinfData {
        name,
        logo: capture(&LOGO_REGEX, line).unwrap_or_default(),
        group: capture(&GROUP_REGEX, line).unwrap_or_else(|| DEFAULT_GROUP.to_string()),
    }
}

/// Parse M3U text into channels, in playlist order
///
/// Each `#EXTINF` line looks exactly one line ahead: the entry is kept only
/// when that line starts with `http`. Anything else is skipped.
pub fn parse(content: &str) -> Vec<Channel> {
    let lines: Vec<&str> = content.split('\n').map(str::trim).collect();
    let mut channels = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with("#EXTINF") {
            continue;
        }

        let url = match lines.get(i + 1) {
            Some(next) if next.starts_with("http") => *next,
            _ => {
                debug!("Skipping EXTINF without stream URL at line {}", i + 1);
                continue;
            }
        };

        let extinf = parse_extinf(line);
        channels.push(Channel {
            name: extinf.name,
            group: extinf.group,
            logo: extinf.logo,
            url: url.to_string(),
        });
    }

    channels
}

/// Download a playlist and parse it
pub async fn fetch_playlist(http: &Client, url: &str) -> Result<Vec<Channel>, XtreamError> {
    let text = download(http, url).await.map_err(|e| {
        error!("Failed to download playlist: {}", e);
        e
    })?;

    let channels = parse(&text);
    info!("Parsed playlist: {} channels", channels.len());
    Ok(channels)
}

async fn download(http: &Client, url: &str) -> Result<String, XtreamError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| XtreamError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(XtreamError::Http(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| XtreamError::Network(e.to_string()))
}
