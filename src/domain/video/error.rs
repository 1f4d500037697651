use crate::error::AppError;
use crate::infrastructure::fetch::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum VideoServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error("not configured: {0}")]
    NotConfigured(String),
    #[error(transparent)]
    Upstream(#[from] FetchError),
}

impl From<VideoServiceError> for AppError {
    fn from(err: VideoServiceError) -> Self {
        match err {
            VideoServiceError::Invalid(msg) => AppError::BadRequest(msg),
            VideoServiceError::NotFound(msg) => AppError::NotFound(msg),
            VideoServiceError::NotConfigured(msg) => AppError::ServiceUnavailable(msg),
            VideoServiceError::Upstream(e) => AppError::from(e),
        }
    }
}
