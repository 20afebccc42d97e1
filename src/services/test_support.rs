//! Fake IPTV provider for tests
//!
//! Serves `player_api.php` and a couple of playlists from a local axum
//! router bound to an ephemeral port. The username selects failure modes:
//! `broken` -> 500, `empty` -> `null` body, `html` -> HTML page,
//! `expired` -> inactive account.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;

use crate::models::Credentials;

pub const PLAYLIST: &str = "#EXTM3U\r\n\
#EXTINF:-1 tvg-logo=\"http://x/logo.png\" group-title=\"News\",BBC One\r\n\
http://stream/1\r\n\
#EXTINF:-1,No Url\r\n\
#EXTVLCOPT:http-user-agent=VLC\r\n\
#EXTINF:-1 group-title=\"Sport\",Eurosport\r\n\
http://stream/2\r\n";

async fn player_api(Query(params): Query<HashMap<String, String>>) -> Response {
    let username = params.get("username").map(String::as_str).unwrap_or("");
    let action = params.get("action").map(String::as_str).unwrap_or("");

    match username {
        "broken" => return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "empty" => return "null".into_response(),
        "html" => return "<html><body>Forbidden</body></html>".into_response(),
        _ => {}
    }

    let body = match action {
        "" => {
            let status = if username == "expired" { "Expired" } else { "Active" };
            json!({"user_info": {"username": username, "status": status, "auth": 1}})
        }
        "get_live_streams" => json!([
            {"name": "CNN", "stream_id": 101, "stream_icon": "http://x/cnn.png", "category_id": "1"},
            {"name": "Local", "stream_id": "102", "stream_icon": null}
        ]),
        "get_vod_streams" => json!([
            {"name": "Heat", "stream_id": 42, "added": "1995-12-15 20:00:00",
             "category_id": "5", "container_extension": "mkv", "custom_sid": "abc"},
            {"name": "Ronin", "stream_id": 43, "direct_source": "http://cdn/ronin.mp4"}
        ]),
        "get_series" => json!([
            {"name": "Dark", "series_id": 7, "cover": "http://x/dark.jpg", "category_id": "9"}
        ]),
        "get_series_info" => json!({
            "info": {"name": "Dark"},
            "episodes": {
                "2": [{"id": "201", "title": "S02E01", "container_extension": "mkv"}],
                "1": [
                    {"id": "101", "title": "S01E01", "container_extension": "mp4"},
                    {"id": "102", "title": "S01E02", "container_extension": "mp4", "custom_sid": "tok"}
                ]
            }
        }),
        _ => return (StatusCode::BAD_REQUEST, "unknown action").into_response(),
    };

    Json(body).into_response()
}

/// Start the fake provider, returning its base URL
pub async fn provider() -> String {
    let app = Router::new()
        .route("/player_api.php", get(player_api))
        .route("/playlist.m3u", get(|| async { PLAYLIST }))
        .route("/missing.m3u", get(|| async { StatusCode::NOT_FOUND }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn creds_for(server: &str) -> Credentials {
    Credentials {
        server: server.to_string(),
        username: "user".to_string(),
        password: "pass".to_string(),
    }
}
