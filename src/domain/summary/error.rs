use crate::error::AppError;
use crate::infrastructure::fetch::FetchError;
use crate::infrastructure::repositories::SummarizerError;

#[derive(Debug, thiserror::Error)]
pub enum SummaryServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("transcript provider failed: {0}")]
    Transcript(#[from] FetchError),
    #[error("summarization failed: {0}")]
    Summarizer(#[from] SummarizerError),
}

impl From<SummaryServiceError> for AppError {
    fn from(err: SummaryServiceError) -> Self {
        match err {
            SummaryServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SummaryServiceError::Transcript(e) => AppError::from(e),
            SummaryServiceError::Summarizer(SummarizerError::Fetch(e)) => AppError::from(e),
            SummaryServiceError::Summarizer(e) => AppError::ExternalService(e.to_string()),
        }
    }
}
