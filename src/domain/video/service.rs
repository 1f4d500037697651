use super::error::VideoServiceError;
use super::{
    PlaylistDigestResponse, PlaylistResponse, PlaylistVideo, PlaylistVideoSummary, VideoResponse,
};
use crate::domain::feed::WindowedCollector;
use crate::domain::summary::{
    service::validate_video_id, SummaryService, SummaryServiceApi, SummaryStatus, VideoSummary,
};
use crate::infrastructure::oauth::GoogleOAuthClient;
use crate::infrastructure::youtube::YouTubeClient;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use futures::stream::{self, StreamExt};
use regex::Regex;
use std::sync::{Arc, LazyLock};

const UNKNOWN_PLAYLIST: &str = "unknown_playlist";
const MAX_HOURS_BACK: i64 = 24 * 365;

static PLAYLIST_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{2,64}$").expect("playlist id pattern is valid"));

pub struct VideoService {
    youtube: Arc<YouTubeClient>,
    oauth: Option<Arc<GoogleOAuthClient>>,
    summary_service: Arc<SummaryService>,
    collector: WindowedCollector,
    default_hours_back: i64,
    summary_concurrency: usize,
}

impl VideoService {
    pub fn new(
        youtube: Arc<YouTubeClient>,
        oauth: Option<Arc<GoogleOAuthClient>>,
        summary_service: Arc<SummaryService>,
        default_hours_back: i64,
        max_videos: usize,
        summary_concurrency: usize,
    ) -> Self {
        Self {
            youtube,
            oauth,
            summary_service,
            collector: WindowedCollector::new(max_videos),
            default_hours_back,
            summary_concurrency: summary_concurrency.max(1),
        }
    }
}

#[async_trait]
pub trait VideoServiceApi: Send + Sync {
    /// Videos added to the playlist within the last `hours_back` hours, newest first
    async fn list_recent_videos(
        &self,
        playlist_id: &str,
        hours_back: Option<i64>,
    ) -> Result<Vec<VideoResponse>, VideoServiceError>;

    async fn get_playlist(&self, playlist_id: &str) -> Result<PlaylistResponse, VideoServiceError>;

    /// List recent videos and summarize each one.
    ///
    /// Listing failures abort the digest. Per-video failures are reported
    /// in that video's entry.
    async fn summarize_playlist(
        &self,
        playlist_id: &str,
        hours_back: Option<i64>,
    ) -> Result<PlaylistDigestResponse, VideoServiceError>;

    /// Remove a video from a playlist, looking up its playlist item first
    async fn delete_video(&self, playlist_id: &str, video_id: &str) -> Result<(), VideoServiceError>;
}

#[async_trait]
impl VideoServiceApi for VideoService {
    async fn list_recent_videos(
        &self,
        playlist_id: &str,
        hours_back: Option<i64>,
    ) -> Result<Vec<VideoResponse>, VideoServiceError> {
        let hours_back = self.resolve_hours_back(hours_back)?;
        let videos = self.collect_recent(playlist_id, hours_back).await?;
        Ok(videos.into_iter().map(VideoResponse::from).collect())
    }

    async fn get_playlist(&self, playlist_id: &str) -> Result<PlaylistResponse, VideoServiceError> {
        validate_playlist_id(playlist_id)?;
        let title = self
            .youtube
            .get_playlist_title(playlist_id)
            .await?
            .unwrap_or_else(|| UNKNOWN_PLAYLIST.to_string());

        Ok(PlaylistResponse {
            id: playlist_id.to_string(),
            title,
        })
    }

    async fn summarize_playlist(
        &self,
        playlist_id: &str,
        hours_back: Option<i64>,
    ) -> Result<PlaylistDigestResponse, VideoServiceError> {
        let hours_back = self.resolve_hours_back(hours_back)?;
        let videos = self.collect_recent(playlist_id, hours_back).await?;
        let playlist_title = self.playlist_title_or_fallback(playlist_id).await;

        tracing::info!(
            playlist_id,
            videos = videos.len(),
            concurrency = self.summary_concurrency,
            "Summarizing playlist"
        );

        let summary_service = &self.summary_service;
        let results: Vec<PlaylistVideoSummary> = stream::iter(videos)
            .map(|video| async move {
                let summary = summarize_or_report(summary_service, &video).await;
                PlaylistVideoSummary {
                    video: VideoResponse::from(video),
                    status: summary.status,
                    summary: summary.summary,
                    transcript_chars: summary.transcript_chars,
                }
            })
            .buffered(self.summary_concurrency)
            .collect()
            .await;

        let successful = results
            .iter()
            .filter(|r| r.status == SummaryStatus::Success)
            .count();

        tracing::info!(
            playlist_id,
            total = results.len(),
            successful,
            "Playlist digest complete"
        );

        Ok(PlaylistDigestResponse {
            playlist_id: playlist_id.to_string(),
            playlist_title,
            hours_back,
            generated_at: Utc::now(),
            total: results.len(),
            successful,
            failed: results.len() - successful,
            results,
        })
    }

    async fn delete_video(&self, playlist_id: &str, video_id: &str) -> Result<(), VideoServiceError> {
        validate_playlist_id(playlist_id)?;
        validate_video_id(video_id).map_err(|e| VideoServiceError::Invalid(e.to_string()))?;

        let oauth = self.oauth.as_ref().ok_or_else(|| {
            VideoServiceError::NotConfigured(
                "Google OAuth credentials are required to delete videos".to_string(),
            )
        })?;

        let item = self
            .collector
            .find_first(&self.youtube.playlist_items(playlist_id), |video| {
                video.video_id == video_id
            })
            .await?
            .ok_or_else(|| {
                VideoServiceError::NotFound(format!(
                    "Video {} not found in playlist {}",
                    video_id, playlist_id
                ))
            })?;

        let token = oauth.refresh_access_token().await?;
        self.youtube
            .delete_playlist_item(&item.playlist_item_id, &token.access_token)
            .await?;

        tracing::info!(playlist_id, video_id, playlist_item_id = %item.playlist_item_id, "Video removed from playlist");
        Ok(())
    }
}

impl VideoService {
    fn resolve_hours_back(&self, hours_back: Option<i64>) -> Result<i64, VideoServiceError> {
        let hours_back = hours_back.unwrap_or(self.default_hours_back);
        if !(1..=MAX_HOURS_BACK).contains(&hours_back) {
            return Err(VideoServiceError::Invalid(format!(
                "hoursBack must be between 1 and {}",
                MAX_HOURS_BACK
            )));
        }
        Ok(hours_back)
    }

    async fn collect_recent(
        &self,
        playlist_id: &str,
        hours_back: i64,
    ) -> Result<Vec<PlaylistVideo>, VideoServiceError> {
        validate_playlist_id(playlist_id)?;
        let cutoff = cutoff_for(Utc::now(), hours_back);

        let videos = self
            .collector
            .collect_since(&self.youtube.playlist_items(playlist_id), cutoff)
            .await?;

        tracing::info!(playlist_id, hours_back, videos = videos.len(), "Recent videos collected");
        Ok(videos)
    }

    async fn playlist_title_or_fallback(&self, playlist_id: &str) -> String {
        match self.youtube.get_playlist_title(playlist_id).await {
            Ok(Some(title)) => title,
            Ok(None) => UNKNOWN_PLAYLIST.to_string(),
            Err(e) => {
                tracing::warn!(playlist_id, error = %e, "Could not fetch playlist title");
                UNKNOWN_PLAYLIST.to_string()
            }
        }
    }
}

async fn summarize_or_report(summary_service: &SummaryService, video: &PlaylistVideo) -> VideoSummary {
    match summary_service
        .summarize_video(&video.video_id, &video.title)
        .await
    {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(video_id = %video.video_id, error = %e, "Failed to summarize video");
            VideoSummary {
                video_id: video.video_id.clone(),
                status: SummaryStatus::Error,
                summary: format!("Error: {}", e),
                transcript_chars: 0,
                transcript_language: None,
            }
        }
    }
}

fn cutoff_for(now: DateTime<Utc>, hours_back: i64) -> DateTime<Utc> {
    now - Duration::seconds(hours_back * 3600)
}

fn validate_playlist_id(playlist_id: &str) -> Result<(), VideoServiceError> {
    if !PLAYLIST_ID_PATTERN.is_match(playlist_id) {
        return Err(VideoServiceError::Invalid(format!(
            "'{}' is not a valid playlist id",
            playlist_id
        )));
    }
    Ok(())
}
