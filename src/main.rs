use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tourguide_backend::controllers::{bot::BotController, speech::SpeechController};
use tourguide_backend::domain::{bot::BotService, speech::SpeechService};
use tourguide_backend::infrastructure::config::{Config, LogFormat};
use tourguide_backend::infrastructure::http::{create_router, start_http_server};
use tourguide_backend::infrastructure::repositories::{AudioClipRepository, OpenAiSpeechRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Tour Guide backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        api_base = %config.openai_api_base,
        model = %config.tts_model,
        voice = %config.tts_voice,
        "Speech provider configured"
    );

    let config = Arc::new(config);
    let http_client = reqwest::Client::new();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    let speech_repo = Arc::new(OpenAiSpeechRepository::from_config(http_client, &config));
    let clip_repo = Arc::new(AudioClipRepository::new(
        Duration::from_secs(config.audio_clip_ttl_secs),
        config.audio_clip_capacity,
    ));

    // 2. Services
    let speech_service = Arc::new(SpeechService::new(speech_repo, clip_repo.clone()));
    let bot_service = Arc::new(BotService::new(Duration::from_millis(
        config.bot_response_delay_ms,
    )));

    // 3. Controllers
    let speech_controller = Arc::new(SpeechController::new(
        speech_service,
        config.public_base_url.clone(),
    ));
    let bot_controller = Arc::new(BotController::new(bot_service));

    let app = create_router(&config, clip_repo, speech_controller, bot_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tourguide_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tourguide_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
