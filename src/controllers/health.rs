use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness reports which upstream collaborators are configured
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let configured = |value: &str| {
        if value.trim().is_empty() {
            "missing"
        } else {
            "configured"
        }
    };

    let youtube = configured(&config.youtube_api_key);
    let transcripts = configured(&config.transcript_api_key);
    let llm = configured(&config.llm_api_key);
    let oauth = if config.google_credentials().is_some() {
        "configured"
    } else {
        "disabled"
    };

    let ready = [youtube, transcripts, llm].iter().all(|s| *s == "configured");
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if ready { "ready" } else { "not_ready" },
            "youtube": youtube,
            "transcripts": transcripts,
            "llm": llm,
            "oauth": oauth
        })),
    )
}
