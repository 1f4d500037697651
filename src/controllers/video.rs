use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::summary::{SummarizeVideoRequest, SummaryService, SummaryServiceApi, VideoSummary},
    error::{AppError, AppResult},
};

pub struct VideoController {
    summary_service: Arc<SummaryService>,
}

impl VideoController {
    pub fn new(summary_service: Arc<SummaryService>) -> Self {
        Self { summary_service }
    }

    /// POST /api/videos/{videoId}/summary - Summarize a single video
    pub async fn summarize_video(
        State(controller): State<Arc<VideoController>>,
        Path(video_id): Path<String>,
        Json(request): Json<SummarizeVideoRequest>,
    ) -> AppResult<Json<VideoSummary>> {
        if request.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title cannot be empty".to_string()));
        }

        let summary = controller
            .summary_service
            .summarize_video(&video_id, &request.title)
            .await?;
        Ok(Json(summary))
    }
}
