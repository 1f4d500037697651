use axum::Router;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    controllers::{playlist::PlaylistController, video::VideoController},
    domain::{summary::SummaryService, video::VideoService},
    infrastructure::{
        config::Config,
        fetch::{FetchError, ResilientClient, RetryPolicy},
        http::create_router,
        oauth::GoogleOAuthClient,
        repositories::{HttpTranscriptRepository, OpenAiSummarizerRepository},
        youtube::YouTubeClient,
    },
};

/// Wire clients, repositories, services and controllers into a router
pub fn build_app(config: Arc<Config>) -> Result<Router, FetchError> {
    // === DEPENDENCY INJECTION SETUP ===
    // 1. Shared outbound HTTP client
    let policy = RetryPolicy::with_max_retries(config.max_retries);
    let http = ResilientClient::new(Duration::from_secs(config.http_timeout_secs), policy)?;
    tracing::info!(
        max_retries = policy.max_retries,
        timeout_secs = config.http_timeout_secs,
        "Outbound HTTP client ready"
    );

    // 2. Upstream clients
    let youtube = Arc::new(YouTubeClient::new(
        config.youtube_api_key.clone(),
        config.youtube_api_base_url.clone(),
        http.clone(),
    ));
    let google_oauth = config.google_credentials().map(|credentials| {
        Arc::new(GoogleOAuthClient::new(
            credentials.client_id,
            credentials.client_secret,
            credentials.refresh_token,
            config.google_token_url.clone(),
            http.clone(),
        ))
    });
    if google_oauth.is_none() {
        tracing::warn!("Google OAuth credentials not configured, video removal is disabled");
    }

    // 3. Repositories
    let transcript_repo = Arc::new(HttpTranscriptRepository::new(
        config.transcript_api_key.clone(),
        config.transcript_api_base_url.clone(),
        config.transcript_languages.clone(),
        http.clone(),
    ));
    let summarizer_repo = Arc::new(OpenAiSummarizerRepository::new(
        config.llm_api_key.clone(),
        config.llm_api_base_url.clone(),
        config.llm_model.clone(),
        config.llm_max_tokens,
        http,
    ));

    // 4. Services
    let summary_service = Arc::new(SummaryService::new(
        transcript_repo,
        summarizer_repo,
        config.summary_cache_enabled,
    ));
    let video_service = Arc::new(VideoService::new(
        youtube,
        google_oauth,
        summary_service.clone(),
        config.hours_back,
        config.max_videos,
        config.summary_concurrency,
    ));

    // 5. Controllers
    let playlist_controller = Arc::new(PlaylistController::new(video_service));
    let video_controller = Arc::new(VideoController::new(summary_service));

    Ok(create_router(config, playlist_controller, video_controller))
}
