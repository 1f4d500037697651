use crate::infrastructure::fetch::FetchError;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid summarization request: {0}")]
    InvalidRequest(String),
    #[error("LLM returned no text content")]
    EmptyResponse,
}

/// Repository for LLM summarization.
/// Abstracts the underlying provider (any OpenAI-compatible endpoint).
#[async_trait]
pub trait SummarizerRepository: Send + Sync {
    /// Produce a Markdown summary of `transcript` for the video titled `title`
    async fn summarize(&self, title: &str, transcript: &str) -> Result<String, SummarizerError>;
}
