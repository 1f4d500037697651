use super::dto::{PlaylistItemListResponse, PlaylistListResponse};
use crate::domain::feed::{Page, PageSource};
use crate::domain::video::PlaylistVideo;
use crate::infrastructure::fetch::{ensure_success, FetchError, ResilientClient};
use async_trait::async_trait;

/// YouTube caps `maxResults` at 50
pub const PAGE_SIZE: u32 = 50;

pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    http: ResilientClient,
}

impl YouTubeClient {
    pub fn new(api_key: String, base_url: String, http: ResilientClient) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Page source over the items of one playlist
    pub fn playlist_items<'a>(&'a self, playlist_id: &'a str) -> PlaylistItemsSource<'a> {
        PlaylistItemsSource {
            client: self,
            playlist_id,
        }
    }

    /// Fetch one page of `playlistItems`
    pub async fn fetch_playlist_items_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<Page<PlaylistVideo>, FetchError> {
        let mut query = vec![
            ("part", "snippet,contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", PAGE_SIZE.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let request = self
            .http
            .http()
            .get(format!("{}/playlistItems", self.base_url))
            .query(&query);

        let response: PlaylistItemListResponse = self
            .http
            .send_json(request, "youtube.playlistItems.list")
            .await?;

        tracing::debug!(
            playlist_id,
            items = response.items.len(),
            has_next_page = response.next_page_token.is_some(),
            "Fetched playlist items page"
        );

        Ok(Page::new(
            response.items.into_iter().map(PlaylistVideo::from).collect(),
            response.next_page_token,
        ))
    }

    /// Title of a playlist, `None` when the id matches nothing
    pub async fn get_playlist_title(&self, playlist_id: &str) -> Result<Option<String>, FetchError> {
        let request = self
            .http
            .http()
            .get(format!("{}/playlists", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("id", playlist_id),
                ("key", self.api_key.as_str()),
            ]);

        let response: PlaylistListResponse =
            self.http.send_json(request, "youtube.playlists.list").await?;

        Ok(response.items.into_iter().next().map(|p| p.snippet.title))
    }

    /// Remove one item from a playlist. Requires an OAuth access token.
    pub async fn delete_playlist_item(
        &self,
        playlist_item_id: &str,
        access_token: &str,
    ) -> Result<(), FetchError> {
        let label = "youtube.playlistItems.delete";
        let request = self
            .http
            .http()
            .delete(format!("{}/playlistItems", self.base_url))
            .query(&[("id", playlist_item_id)])
            .bearer_auth(access_token);

        let response = self.http.send(request, label).await?;
        ensure_success(response, label).await?;

        tracing::info!(playlist_item_id, "Playlist item deleted");
        Ok(())
    }
}

pub struct PlaylistItemsSource<'a> {
    client: &'a YouTubeClient,
    playlist_id: &'a str,
}

#[async_trait]
impl PageSource for PlaylistItemsSource<'_> {
    type Item = PlaylistVideo;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<PlaylistVideo>, FetchError> {
        self.client
            .fetch_playlist_items_page(self.playlist_id, cursor)
            .await
    }
}
