use axum::{
    http::Method,
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{health, playlist::PlaylistController, video::VideoController};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Build the application router with all routes configured
pub fn create_router(
    config: Arc<Config>,
    playlist_controller: Arc<PlaylistController>,
    video_controller: Arc<VideoController>,
) -> Router {
    // Playlist routes
    let playlist_routes = Router::new()
        .route("/api/playlists/:playlistId", get(PlaylistController::get_playlist))
        .route(
            "/api/playlists/:playlistId/videos",
            get(PlaylistController::list_videos),
        )
        .route(
            "/api/playlists/:playlistId/summaries",
            post(PlaylistController::summarize_playlist),
        )
        .route(
            "/api/playlists/:playlistId/videos/:videoId",
            delete(PlaylistController::delete_video),
        )
        .with_state(playlist_controller);

    // Single video routes
    let video_routes = Router::new()
        .route(
            "/api/videos/:videoId/summary",
            post(VideoController::summarize_video),
        )
        .with_state(video_controller);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(playlist_routes)
        .merge(video_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
