mod config;
mod models;
mod routes;
mod services;

use axum::{
    routing::{get, post},
    Router,
};
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::session_store::SessionStore;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub http: Client,
    pub sessions: SessionStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent).gzip(true);
        if let Some(ms) = config.fetch_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder.build()?;

        let sessions = SessionStore::new(&config.session_file);

        Ok(Self {
            config,
            http,
            sessions,
            start_time: Instant::now(),
        })
    }
}

/// Build the HTTP router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health endpoints
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/live", get(routes::health::live))
        // Session endpoints
        .route(
            "/api/session",
            post(routes::session::login)
                .get(routes::session::current)
                .delete(routes::session::logout),
        )
        // Catalog endpoints
        .route("/api/live", get(routes::catalog::get_live))
        .route("/api/movies", get(routes::catalog::get_movies))
        .route("/api/series", get(routes::catalog::get_series))
        .route(
            "/api/series/:series_id/episodes",
            get(routes::catalog::get_episodes),
        )
        // Playback
        .route("/api/play", post(routes::play::play_url))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "streamvue_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    tracing::info!("Starting StreamVue Server v{}", env!("CARGO_PKG_VERSION"));
    if config.strict_fetch_errors {
        tracing::info!("Strict fetch errors enabled: failed fetches answer 502");
    }

    let state = Arc::new(AppState::new(config)?);
    tracing::info!("Session file: {}", state.sessions.path().display());

    let app = router(state)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
