pub mod error;
pub mod service;

pub use error::SummaryServiceError;
use serde::{Deserialize, Serialize};
pub use service::{SummaryService, SummaryServiceApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    /// Transcript found and summarized
    Success,
    /// No transcript available for the video
    Failed,
    /// Provider error while processing the video
    Error,
}

/// Summary of one video, as returned by the summary endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    pub video_id: String,
    pub status: SummaryStatus,
    pub summary: String,
    pub transcript_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_language: Option<String>,
}

/// Request for POST /api/videos/:videoId/summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeVideoRequest {
    pub title: String,
}
