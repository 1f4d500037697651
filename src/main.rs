use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubedigest_backend::app::build_app;
use tubedigest_backend::infrastructure::config::{Config, LogFormat};
use tubedigest_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TubeDigest Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        hours_back = config.hours_back,
        max_videos = config.max_videos,
        max_retries = config.max_retries,
        llm_model = %config.llm_model,
        summary_cache_enabled = config.summary_cache_enabled,
        "Configuration loaded"
    );

    let config = Arc::new(config);
    let app = build_app(config.clone())?;

    // Start HTTP server with all routes
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| config.default_log_filter().into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| config.default_log_filter().into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
