pub mod error;
pub mod model;
pub mod service;

pub use error::VideoServiceError;
pub use model::PlaylistVideo;
pub use service::{VideoService, VideoServiceApi};

use crate::domain::summary::SummaryStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for video listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponse {
    pub video_id: String,
    pub playlist_item_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl From<PlaylistVideo> for VideoResponse {
    fn from(video: PlaylistVideo) -> Self {
        Self {
            url: video.watch_url(),
            video_id: video.video_id,
            playlist_item_id: video.playlist_item_id,
            title: video.title,
            channel_title: video.channel_title,
            published_at: video.published_at,
            thumbnail_url: video.thumbnail_url,
        }
    }
}

/// Response for GET /api/playlists/:playlistId
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: String,
    pub title: String,
}

/// One entry of a playlist digest
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistVideoSummary {
    pub video: VideoResponse,
    pub status: SummaryStatus,
    pub summary: String,
    pub transcript_chars: usize,
}

/// Response for POST /api/playlists/:playlistId/summaries
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistDigestResponse {
    pub playlist_id: String,
    pub playlist_title: String,
    pub hours_back: i64,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<PlaylistVideoSummary>,
}
