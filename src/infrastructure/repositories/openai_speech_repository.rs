use super::speech_repository::{SpeechRepository, SynthesisError};
use crate::domain::speech::SynthesizedAudio;
use crate::infrastructure::config::{ApiKey, Config};
use async_trait::async_trait;
use serde::Serialize;

/// Body of `POST {api_base}/audio/speech`
#[derive(Debug, Serialize)]
struct CreateSpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

/// OpenAI audio speech implementation of the speech repository
pub struct OpenAiSpeechRepository {
    http_client: reqwest::Client,
    api_base: String,
    api_key: ApiKey,
    model: String,
    voice: String,
}

impl OpenAiSpeechRepository {
    pub fn new(
        http_client: reqwest::Client,
        api_base: String,
        api_key: ApiKey,
        model: String,
        voice: String,
    ) -> Self {
        Self {
            http_client,
            api_base,
            api_key,
            model,
            voice,
        }
    }

    pub fn from_config(http_client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            http_client,
            config.openai_api_base.clone(),
            config.openai_api_key.clone(),
            config.tts_model.clone(),
            config.tts_voice.clone(),
        )
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechRepository for OpenAiSpeechRepository {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            voice = %self.voice,
            text_length = text.len(),
            "Calling OpenAI speech API"
        );

        let request = CreateSpeechRequest {
            model: &self.model,
            voice: &self.voice,
            input: text,
        };

        let response = self
            .http_client
            .post(self.speech_url())
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| SynthesisError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = status.as_u16(),
                latency_ms = start_time.elapsed().as_millis(),
                "OpenAI speech API returned an error status"
            );
            return Err(SynthesisError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Transport(e.to_string()))?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = %self.voice,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_bytes.len(),
            "Speech synthesis completed"
        );

        Ok(SynthesizedAudio::mpeg(audio_bytes))
    }
}
