use serde::Deserialize;
use std::env;
use std::fmt;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TTS_MODEL: &str = "tts-1";
pub const DEFAULT_TTS_VOICE: &str = "alloy";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Speech provider
    pub openai_api_key: ApiKey,
    pub openai_api_base: String,
    pub tts_model: String,
    pub tts_voice: String,
    // Audio clips
    pub public_base_url: Option<String>,
    pub audio_clip_ttl_secs: u64,
    pub audio_clip_capacity: u64,
    // Bot responder
    pub bot_response_delay_ms: u64,
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

/// Provider credential. `Debug` never prints the secret.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("OPENAI_API_KEY must be set to a non-empty value")]
pub struct MissingApiKey;

#[derive(Debug, thiserror::Error)]
#[error("{0} must be greater than zero")]
pub struct ZeroSetting(&'static str);

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        if openai_api_key.trim().is_empty() {
            return Err(MissingApiKey.into());
        }

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            openai_api_key: ApiKey::new(openai_api_key),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string()),
            tts_model: env::var("TTS_MODEL").unwrap_or_else(|_| DEFAULT_TTS_MODEL.to_string()),
            tts_voice: env::var("TTS_VOICE").unwrap_or_else(|_| DEFAULT_TTS_VOICE.to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            audio_clip_ttl_secs: env::var("AUDIO_CLIP_TTL_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()?,
            audio_clip_capacity: env::var("AUDIO_CLIP_CAPACITY")
                .unwrap_or_else(|_| "256".to_string())
                .parse()?,
            bot_response_delay_ms: env::var("BOT_RESPONSE_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()?,
        };

        if config.audio_clip_ttl_secs == 0 {
            return Err(ZeroSetting("AUDIO_CLIP_TTL_SECS").into());
        }
        if config.audio_clip_capacity == 0 {
            return Err(ZeroSetting("AUDIO_CLIP_CAPACITY").into());
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
