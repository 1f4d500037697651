use crate::domain::feed::Published;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistVideo {
    pub playlist_item_id: String,
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail_url: Option<String>,
}

impl PlaylistVideo {
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL, self.video_id)
    }
}

impl Published for PlaylistVideo {
    fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }
}
