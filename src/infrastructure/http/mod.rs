use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    bot::BotController,
    health,
    speech::{reject_plain_options, SpeechController, SPEECH_ROUTE},
};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::AudioClipRepository;
use crate::infrastructure::request_id::request_id_middleware;

/// Build the application router with all routes and layers
pub fn create_router(
    config: &Config,
    clip_repo: Arc<AudioClipRepository>,
    speech_controller: Arc<SpeechController>,
    bot_controller: Arc<BotController>,
) -> Router {
    // Speech routes; every method except POST gets the JSON 405 body
    let speech_routes = Router::new()
        .route(
            SPEECH_ROUTE,
            post(SpeechController::synthesize).fallback(SpeechController::method_not_allowed),
        )
        .route(
            "/api/speech/audio/:clipId",
            get(SpeechController::get_audio).delete(SpeechController::revoke_audio),
        )
        .with_state(speech_controller);

    // Mock bot responses for the chat view
    let bot_routes = Router::new()
        .route("/api/bot/text", post(BotController::text))
        .route("/api/bot/speech", post(BotController::speech))
        .route("/api/bot/image", post(BotController::image))
        .route("/api/bot/location", post(BotController::location))
        .with_state(bot_controller);

    let cors = if config.is_development() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(clip_repo)
        .merge(speech_routes)
        .merge(bot_routes)
        .layer(cors)
        .layer(middleware::from_fn(reject_plain_options))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
