use super::error::SummaryServiceError;
use super::{SummaryStatus, VideoSummary};
use crate::infrastructure::repositories::{SummarizerRepository, TranscriptRepository};
use async_trait::async_trait;
use moka::future::Cache;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

const NO_TRANSCRIPT: &str = "No transcript available";

static VIDEO_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("video id pattern is valid"));

// Non-speech cues such as [Music] or [Applause]
static CUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]{1,40}\]").expect("cue pattern is valid"));

static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

pub struct SummaryService {
    transcript_repo: Arc<dyn TranscriptRepository>,
    summarizer_repo: Arc<dyn SummarizerRepository>,
    cache: Option<Cache<String, VideoSummary>>,
}

impl SummaryService {
    pub fn new(
        transcript_repo: Arc<dyn TranscriptRepository>,
        summarizer_repo: Arc<dyn SummarizerRepository>,
        cache_enabled: bool,
    ) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(500)
                    .time_to_live(Duration::from_secs(24 * 60 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            transcript_repo,
            summarizer_repo,
            cache,
        }
    }
}

#[async_trait]
pub trait SummaryServiceApi: Send + Sync {
    /// Fetch the transcript of a video and summarize it.
    ///
    /// A video without a transcript is not an error: it yields a summary
    /// with [`SummaryStatus::Failed`]. Provider failures are errors.
    async fn summarize_video(
        &self,
        video_id: &str,
        title: &str,
    ) -> Result<VideoSummary, SummaryServiceError>;
}

#[async_trait]
impl SummaryServiceApi for SummaryService {
    async fn summarize_video(
        &self,
        video_id: &str,
        title: &str,
    ) -> Result<VideoSummary, SummaryServiceError> {
        validate_video_id(video_id)?;

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(video_id).await {
                tracing::info!(video_id, "Summary cache hit");
                return Ok(cached);
            }
        }

        let Some(transcript) = self.transcript_repo.fetch_transcript(video_id).await? else {
            return Ok(VideoSummary::without_transcript(video_id));
        };

        let cleaned = clean_transcript(&transcript.text);
        if cleaned.is_empty() {
            tracing::warn!(video_id, "Transcript contained no speech after cleanup");
            return Ok(VideoSummary::without_transcript(video_id));
        }

        tracing::info!(
            video_id,
            original_length = transcript.text.len(),
            cleaned_length = cleaned.len(),
            "Transcript cleaned"
        );

        let summary = self.summarizer_repo.summarize(title, &cleaned).await?;

        let result = VideoSummary {
            video_id: video_id.to_string(),
            status: SummaryStatus::Success,
            summary,
            transcript_chars: cleaned.chars().count(),
            transcript_language: transcript.language,
        };

        if let Some(cache) = &self.cache {
            cache.insert(video_id.to_string(), result.clone()).await;
        }

        Ok(result)
    }
}

impl VideoSummary {
    fn without_transcript(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            status: SummaryStatus::Failed,
            summary: NO_TRANSCRIPT.to_string(),
            transcript_chars: 0,
            transcript_language: None,
        }
    }
}

pub fn validate_video_id(video_id: &str) -> Result<(), SummaryServiceError> {
    if !VIDEO_ID_PATTERN.is_match(video_id) {
        return Err(SummaryServiceError::Invalid(format!(
            "'{}' is not a valid video id",
            video_id
        )));
    }
    Ok(())
}

/// Drop bracketed non-speech cues and normalize whitespace
fn clean_transcript(text: &str) -> String {
    let without_cues = CUE_PATTERN.replace_all(text, " ");
    WHITESPACE_PATTERN
        .replace_all(&without_cues, " ")
        .trim()
        .to_string()
}
