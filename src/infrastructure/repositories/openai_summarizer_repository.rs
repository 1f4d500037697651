use super::summarizer_repository::{SummarizerError, SummarizerRepository};
use crate::infrastructure::fetch::ResilientClient;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
};
use async_trait::async_trait;

/// Chat-completions summarizer for OpenAI-compatible providers.
///
/// Requests go through the resilient client rather than the SDK's own
/// transport, so rate limits are handled like every other upstream.
pub struct OpenAiSummarizerRepository {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    http: ResilientClient,
}

impl OpenAiSummarizerRepository {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        max_tokens: u32,
        http: ResilientClient,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            max_tokens,
            http,
        }
    }

    fn build_prompt(title: &str, transcript: &str) -> String {
        format!(
            "Please provide a comprehensive summary of this YouTube video transcript.\n\
             Focus on the main points, key takeaways, and important details.\n\
             Format the summary as Markdown.\n\n\
             Video Title: {}\n\n\
             Transcript:\n{}\n",
            title, transcript
        )
    }

    fn build_request(
        &self,
        title: &str,
        transcript: &str,
    ) -> Result<CreateChatCompletionRequest, SummarizerError> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(Self::build_prompt(title, transcript))
            .build()
            .map_err(|e| SummarizerError::InvalidRequest(e.to_string()))?
            .into();

        CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .max_tokens(self.max_tokens)
            .messages(vec![message])
            .build()
            .map_err(|e| SummarizerError::InvalidRequest(e.to_string()))
    }
}

#[async_trait]
impl SummarizerRepository for OpenAiSummarizerRepository {
    async fn summarize(&self, title: &str, transcript: &str) -> Result<String, SummarizerError> {
        let start_time = std::time::Instant::now();
        let body = self.build_request(title, transcript)?;

        tracing::info!(
            model = %self.model,
            title,
            transcript_length = transcript.len(),
            "Calling LLM for summary"
        );

        let request = self
            .http
            .http()
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body);

        let response: CreateChatCompletionResponse = self
            .http
            .send_json(request, "llm.chat_completions")
            .await?;

        let summary = response
            .choices
            .into_iter()
            .filter_map(|choice| choice.message.content)
            .find(|content| !content.trim().is_empty())
            .ok_or(SummarizerError::EmptyResponse)?;

        tracing::info!(
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis() as u64,
            summary_length = summary.len(),
            "Summary generated"
        );

        Ok(summary)
    }
}
