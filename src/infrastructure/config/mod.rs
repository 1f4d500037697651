use serde::Deserialize;
use std::env;
use std::str::FromStr;

const DEFAULT_LANGUAGES: &str = "en,fr,es,de";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // YouTube Data API
    pub youtube_api_key: String,
    pub youtube_api_base_url: String,
    // Google OAuth, only needed to remove videos from playlists
    pub google_client_id: Option<String>,
    pub google_client_secret: Option<String>,
    pub google_refresh_token: Option<String>,
    pub google_token_url: String,
    // Transcript provider
    pub transcript_api_key: String,
    pub transcript_api_base_url: String,
    pub transcript_languages: Vec<String>,
    // LLM provider
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model: String,
    pub llm_max_tokens: u32,
    // Collection window
    pub hours_back: i64,
    pub max_videos: usize,
    // Outbound HTTP
    pub max_retries: u32,
    pub http_timeout_secs: u64,
    // Summaries
    pub summary_concurrency: usize,
    pub summary_cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Google OAuth credentials, present only when all three are configured
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 8080)?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            youtube_api_key: env::var("YOUTUBE_API_KEY")?,
            youtube_api_base_url: env::var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_string()),
            google_client_id: optional("GOOGLE_CLIENT_ID"),
            google_client_secret: optional("GOOGLE_CLIENT_SECRET"),
            google_refresh_token: optional("GOOGLE_REFRESH_TOKEN"),
            google_token_url: env::var("GOOGLE_TOKEN_URL")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
            transcript_api_key: env::var("TRANSCRIPT_API_KEY")?,
            transcript_api_base_url: env::var("TRANSCRIPT_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.supadata.ai/v1".to_string()),
            transcript_languages: parse_languages(
                &env::var("TRANSCRIPT_LANGUAGES").unwrap_or_else(|_| DEFAULT_LANGUAGES.to_string()),
            ),
            llm_api_key: env::var("LLM_API_KEY")?,
            llm_api_base_url: env::var("LLM_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            llm_max_tokens: parse_or("LLM_MAX_TOKENS", 2000)?,
            hours_back: parse_or("HOURS_BACK", 168)?,
            max_videos: parse_or("MAX_VIDEOS", 50)?,
            max_retries: parse_or("MAX_RETRIES", 3)?,
            http_timeout_secs: parse_or("HTTP_TIMEOUT_SECS", 30)?,
            summary_concurrency: parse_or("SUMMARY_CONCURRENCY", 5)?,
            summary_cache_enabled: env::var("SUMMARY_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_development() {
            "tubedigest_backend=debug,tower_http=debug"
        } else {
            "tubedigest_backend=info,tower_http=info"
        }
    }

    pub fn google_credentials(&self) -> Option<GoogleCredentials> {
        match (
            &self.google_client_id,
            &self.google_client_secret,
            &self.google_refresh_token,
        ) {
            (Some(client_id), Some(client_secret), Some(refresh_token)) => Some(GoogleCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
                refresh_token: refresh_token.clone(),
            }),
            _ => None,
        }
    }
}

/// Comma-separated language codes, in priority order. Blank lists fall back to the default.
fn parse_languages(raw: &str) -> Vec<String> {
    let languages: Vec<String> = raw
        .split(',')
        .map(|code| code.trim().to_lowercase())
        .filter(|code| !code.is_empty())
        .collect();

    if languages.is_empty() {
        return parse_languages(DEFAULT_LANGUAGES);
    }
    languages
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(key: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: std::error::Error + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| format!("{} is invalid: {}", key, e).into()),
        Err(_) => Ok(default),
    }
}
