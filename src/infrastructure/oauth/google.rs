use crate::infrastructure::fetch::{FetchError, ResilientClient};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GoogleAccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

/// Exchanges a long-lived refresh token for short-lived access tokens
pub struct GoogleOAuthClient {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    token_url: String,
    http: ResilientClient,
}

impl GoogleOAuthClient {
    pub fn new(
        client_id: String,
        client_secret: String,
        refresh_token: String,
        token_url: String,
        http: ResilientClient,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            refresh_token,
            token_url,
            http,
        }
    }

    pub async fn refresh_access_token(&self) -> Result<GoogleAccessToken, FetchError> {
        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
        ];

        let request = self
            .http
            .http()
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&params);

        let token: GoogleAccessToken = self
            .http
            .send_json(request, "oauth.refresh_token")
            .await?;

        tracing::debug!(expires_in = ?token.expires_in, "OAuth access token refreshed");
        Ok(token)
    }
}
