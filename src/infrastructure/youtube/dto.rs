use crate::domain::video::PlaylistVideo;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub id: String,
    pub snippet: PlaylistItemSnippet,
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub title: String,
    pub channel_title: Option<String>,
    /// Absent for deleted or private videos
    pub video_owner_channel_title: Option<String>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub medium: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistResource>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistResource {
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistSnippet {
    pub title: String,
}

impl From<PlaylistItem> for PlaylistVideo {
    fn from(item: PlaylistItem) -> Self {
        let snippet = item.snippet;
        let thumbnail_url = snippet
            .thumbnails
            .and_then(|t| t.medium.or(t.default))
            .map(|t| t.url);

        Self {
            playlist_item_id: item.id,
            video_id: item.content_details.video_id,
            title: snippet.title,
            channel_title: snippet
                .video_owner_channel_title
                .or(snippet.channel_title)
                .unwrap_or_default(),
            published_at: snippet.published_at,
            thumbnail_url,
        }
    }
}
