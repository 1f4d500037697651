use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::video::{
        PlaylistDigestResponse, PlaylistResponse, VideoResponse, VideoService, VideoServiceApi,
    },
    error::AppResult,
};

/// Query for endpoints scoped to a recent window of a playlist
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowQuery {
    pub hours_back: Option<i64>,
}

pub struct PlaylistController {
    video_service: Arc<VideoService>,
}

impl PlaylistController {
    pub fn new(video_service: Arc<VideoService>) -> Self {
        Self { video_service }
    }

    /// GET /api/playlists/{playlistId} - Playlist metadata
    pub async fn get_playlist(
        State(controller): State<Arc<PlaylistController>>,
        Path(playlist_id): Path<String>,
    ) -> AppResult<Json<PlaylistResponse>> {
        let playlist = controller.video_service.get_playlist(&playlist_id).await?;
        Ok(Json(playlist))
    }

    /// GET /api/playlists/{playlistId}/videos - Videos added within the window
    pub async fn list_videos(
        State(controller): State<Arc<PlaylistController>>,
        Path(playlist_id): Path<String>,
        Query(query): Query<WindowQuery>,
    ) -> AppResult<Json<Vec<VideoResponse>>> {
        let videos = controller
            .video_service
            .list_recent_videos(&playlist_id, query.hours_back)
            .await?;
        Ok(Json(videos))
    }

    /// POST /api/playlists/{playlistId}/summaries - Summarize every recent video
    pub async fn summarize_playlist(
        State(controller): State<Arc<PlaylistController>>,
        Path(playlist_id): Path<String>,
        Query(query): Query<WindowQuery>,
    ) -> AppResult<Json<PlaylistDigestResponse>> {
        let digest = controller
            .video_service
            .summarize_playlist(&playlist_id, query.hours_back)
            .await?;
        Ok(Json(digest))
    }

    /// DELETE /api/playlists/{playlistId}/videos/{videoId} - Remove a video
    pub async fn delete_video(
        State(controller): State<Arc<PlaylistController>>,
        Path((playlist_id, video_id)): Path<(String, String)>,
    ) -> AppResult<StatusCode> {
        controller
            .video_service
            .delete_video(&playlist_id, &video_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
