use super::transcript_repository::{Transcript, TranscriptRepository};
use crate::infrastructure::fetch::{read_json, FetchError, ResilientClient};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    #[serde(default)]
    content: String,
    lang: Option<String>,
}

/// Transcript provider speaking the `GET /youtube/transcript` API.
///
/// Languages are tried in order; the first one with a transcript wins.
pub struct HttpTranscriptRepository {
    api_key: String,
    base_url: String,
    languages: Vec<String>,
    http: ResilientClient,
}

impl HttpTranscriptRepository {
    pub fn new(
        api_key: String,
        base_url: String,
        languages: Vec<String>,
        http: ResilientClient,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            languages,
            http,
        }
    }

    async fn fetch_in_language(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Option<Transcript>, FetchError> {
        let label = "transcript.fetch";
        let start_time = std::time::Instant::now();

        let request = self
            .http
            .http()
            .get(format!("{}/youtube/transcript", self.base_url))
            .header("x-api-key", self.api_key.as_str())
            .query(&[("videoId", video_id), ("text", "true"), ("lang", language)]);

        let response = self.http.send(request, label).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(video_id, language, "No transcript in this language");
            return Ok(None);
        }

        let body: TranscriptResponse = read_json(response, label).await?;
        if body.content.trim().is_empty() {
            tracing::debug!(video_id, language, "Transcript provider returned an empty transcript");
            return Ok(None);
        }

        tracing::info!(
            video_id,
            requested_language = language,
            language = body.lang.as_deref().unwrap_or("unknown"),
            characters = body.content.len(),
            latency_ms = start_time.elapsed().as_millis() as u64,
            "Transcript fetched"
        );

        Ok(Some(Transcript {
            text: body.content,
            language: body.lang.or_else(|| Some(language.to_string())),
        }))
    }
}

#[async_trait]
impl TranscriptRepository for HttpTranscriptRepository {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Option<Transcript>, FetchError> {
        for language in &self.languages {
            if let Some(transcript) = self.fetch_in_language(video_id, language).await? {
                return Ok(Some(transcript));
            }
        }

        tracing::warn!(
            video_id,
            tried = %self.languages.join(","),
            "No transcript available"
        );
        Ok(None)
    }
}
