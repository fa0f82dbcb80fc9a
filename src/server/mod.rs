pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::playlist::PlaylistGenerator;
use crate::provider::OpenAiProvider;

pub const GENERATE_PLAYLIST_PATH: &str = "/api/generate-playlist";

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub generator: PlaylistGenerator,
}

impl AppState {
    pub fn new(generator: PlaylistGenerator) -> Self {
        Self { generator }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider = Arc::new(OpenAiProvider::new(config));
        info!("OpenAI client initialized (model {})", config.openai_model);
        Self::new(PlaylistGenerator::new(provider))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_handler))
        .route(
            GENERATE_PLAYLIST_PATH,
            post(handlers::generate_playlist_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured port and serve until the process exits.
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::from_config(config);
    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Backend server running at http://localhost:{}", config.port);
    info!("Ready to generate playlists via {}", GENERATE_PLAYLIST_PATH);

    axum::serve(listener, app).await?;

    Ok(())
}
