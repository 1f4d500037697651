pub mod error;
pub mod retry;

pub use error::{body_preview, FetchError};
pub use retry::{is_retryable, RetryPolicy, RETRYABLE_STATUSES};

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Outbound HTTP client that retries transient statuses with capped backoff.
///
/// Every call to an upstream API (YouTube, OAuth, transcripts, LLM) goes
/// through [`ResilientClient::send`]. The client is cheap to clone and
/// shares its connection pool between clones.
#[derive(Clone)]
pub struct ResilientClient {
    http: Client,
    policy: RetryPolicy,
}

impl ResilientClient {
    pub fn new(timeout: Duration, policy: RetryPolicy) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tubedigest-backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| FetchError::Transport {
                label: "http-client".to_string(),
                source,
            })?;
        Ok(Self::with_client(http, policy))
    }

    pub fn with_client(http: Client, policy: RetryPolicy) -> Self {
        Self { http, policy }
    }

    /// Underlying client, used by callers to build request descriptors
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Send `request`, retrying 408/429/503 up to the policy bound.
    ///
    /// Returns the first response whose status is not retryable, whatever
    /// that status is. Fails with [`FetchError::Exhausted`] when every
    /// attempt came back retryable.
    pub async fn send(&self, request: RequestBuilder, label: &str) -> Result<Response, FetchError> {
        let attempts = self.policy.attempts();
        let mut last_status = 0;

        for attempt in 0..attempts {
            let builder = request
                .try_clone()
                .ok_or_else(|| FetchError::UnreplayableRequest {
                    label: label.to_string(),
                })?;

            let response = builder.send().await.map_err(|source| {
                tracing::error!(label, attempt, error = %source, "Upstream request failed");
                FetchError::Transport {
                    label: label.to_string(),
                    source,
                }
            })?;

            let status = response.status().as_u16();
            if !is_retryable(status) {
                return Ok(response);
            }
            last_status = status;

            if attempt + 1 == attempts {
                break;
            }

            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok());
            let delay = self.policy.delay_for(attempt, retry_after);
            drop(response);

            tracing::warn!(
                label,
                attempt,
                status,
                delay_ms = delay.as_millis() as u64,
                "Retryable upstream status, backing off"
            );
            tokio::time::sleep(delay).await;
        }

        tracing::error!(label, attempts, last_status, "Max retries exceeded");
        Err(FetchError::Exhausted {
            label: label.to_string(),
            attempts,
            last_status,
        })
    }

    /// [`send`](Self::send) followed by [`read_json`]
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        label: &str,
    ) -> Result<T, FetchError> {
        let response = self.send(request, label).await?;
        read_json(response, label).await
    }
}

/// Decode a successful JSON body.
///
/// Non-2xx statuses become [`FetchError::Status`]; unparseable bodies become
/// [`FetchError::Malformed`] with a truncated preview of what came back.
pub async fn read_json<T: DeserializeOwned>(response: Response, label: &str) -> Result<T, FetchError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Transport {
            label: label.to_string(),
            source,
        })?;

    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            label: label.to_string(),
            status,
            body: body_preview(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(label, status, error = %e, "Failed to parse upstream response");
        FetchError::Malformed {
            label: label.to_string(),
            status,
            reason: e.to_string(),
            preview: body_preview(&body),
        }
    })
}

/// Turn a non-2xx response into [`FetchError::Status`], discarding success bodies
pub async fn ensure_success(response: Response, label: &str) -> Result<(), FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(FetchError::Status {
        label: label.to_string(),
        status: status.as_u16(),
        body: body_preview(&body),
    })
}
