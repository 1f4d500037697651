use crate::infrastructure::fetch::FetchError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub language: Option<String>,
}

/// Source of plain-text video transcripts.
///
/// Implementations return `Ok(None)` when the provider has no transcript
/// for the video; every other failure is an error.
#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Option<Transcript>, FetchError>;
}
