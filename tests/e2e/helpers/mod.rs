use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tourguide_backend::{
    controllers::{bot::BotController, speech::SpeechController},
    domain::{bot::BotService, speech::SpeechService},
    infrastructure::{
        config::{ApiKey, Config, Environment, LogFormat},
        http::create_router,
        repositories::{AudioClipRepository, OpenAiSpeechRepository},
    },
};


use api_client::TestClient;
use fake_provider::FakeProvider;

pub const TEST_API_KEY: &str = "sk-test-key-for-testing-only";

pub struct TestContext {
    pub client: TestClient,
    pub provider: FakeProvider,
    #[allow(dead_code)]
    pub config: Config,
}

impl TestContext {
    /// Context whose speech provider endpoint refuses connections
    pub async fn with_unreachable_provider() -> Self {
        let provider = FakeProvider::start().await;
        let api_base = fake_provider::unreachable_api_base().await;
        Self::start(provider, api_base, None).await
    }

    /// Context that builds absolute audio URLs
    pub async fn with_public_base_url(base_url: &str) -> Self {
        let provider = FakeProvider::start().await;
        let api_base = provider.api_base.clone();
        Self::start(provider, api_base, Some(base_url.to_string())).await
    }

    async fn start(provider: FakeProvider, api_base: String, public_base_url: Option<String>) -> Self {
        let config = test_config(api_base, public_base_url);
        let app = create_app(&config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: TestClient::new(&base_url),
            provider,
            config,
        }
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let provider = FakeProvider::start().await;
            let api_base = provider.api_base.clone();
            Self::start(provider, api_base, None).await
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Servers stop with the test runtime
        }
    }
}

fn test_config(openai_api_base: String, public_base_url: Option<String>) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        openai_api_key: ApiKey::new(TEST_API_KEY),
        openai_api_base,
        tts_model: "tts-1".to_string(),
        tts_voice: "alloy".to_string(),
        public_base_url,
        audio_clip_ttl_secs: 60,
        audio_clip_capacity: 64,
        bot_response_delay_ms: 0,
    }
}

fn create_app(config: &Config) -> Router {
    let speech_repo = Arc::new(OpenAiSpeechRepository::from_config(
        reqwest::Client::new(),
        config,
    ));
    let clip_repo = Arc::new(AudioClipRepository::new(
        Duration::from_secs(config.audio_clip_ttl_secs),
        config.audio_clip_capacity,
    ));

    let speech_service = Arc::new(SpeechService::new(speech_repo, clip_repo.clone()));
    let bot_service = Arc::new(BotService::new(Duration::from_millis(
        config.bot_response_delay_ms,
    )));

    let speech_controller = Arc::new(SpeechController::new(
        speech_service,
        config.public_base_url.clone(),
    ));
    let bot_controller = Arc::new(BotController::new(bot_service));

    create_router(config, clip_repo, speech_controller, bot_controller)
}
