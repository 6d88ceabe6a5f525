use super::error::SpeechServiceError;
use super::{AudioClip, SynthesisRequest, SynthesizedAudio};
use crate::infrastructure::repositories::{AudioClipRepository, SpeechRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct SpeechService {
    speech_repo: Arc<dyn SpeechRepository>,
    clip_repo: Arc<AudioClipRepository>,
}

impl SpeechService {
    pub fn new(speech_repo: Arc<dyn SpeechRepository>, clip_repo: Arc<AudioClipRepository>) -> Self {
        Self {
            speech_repo,
            clip_repo,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize the request text and return the raw audio
    ///
    /// Every call reaches the provider exactly once; nothing is cached or
    /// retried.
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, SpeechServiceError>;

    /// Synthesize and keep the audio in the clip store under a fresh id
    async fn synthesize_clip(&self, request: SynthesisRequest)
        -> Result<AudioClip, SpeechServiceError>;

    async fn find_clip(&self, clip_id: Uuid) -> Result<AudioClip, SpeechServiceError>;

    async fn revoke_clip(&self, clip_id: Uuid) -> Result<(), SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, SpeechServiceError> {
        let text = Self::require_text(request)?;

        tracing::info!(text_length = text.len(), "Speech synthesis request");

        let audio = self.speech_repo.synthesize(&text).await.map_err(|e| {
            tracing::error!(error = %e, "Speech synthesis failed");
            SpeechServiceError::from(e)
        })?;

        Ok(audio)
    }

    async fn synthesize_clip(
        &self,
        request: SynthesisRequest,
    ) -> Result<AudioClip, SpeechServiceError> {
        let audio = self.synthesize(request).await?;
        let clip = self.clip_repo.store(audio).await;

        tracing::info!(
            clip_id = %clip.id,
            audio_size = clip.audio.len(),
            "Audio clip stored"
        );

        Ok(clip)
    }

    async fn find_clip(&self, clip_id: Uuid) -> Result<AudioClip, SpeechServiceError> {
        let clip = self
            .clip_repo
            .find(clip_id)
            .await
            .ok_or(SpeechServiceError::ClipNotFound)?;

        tracing::debug!(
            clip_id = %clip.id,
            age_secs = (Utc::now() - clip.created_at).num_seconds(),
            "Audio clip fetched"
        );

        Ok(clip)
    }

    async fn revoke_clip(&self, clip_id: Uuid) -> Result<(), SpeechServiceError> {
        if self.clip_repo.remove(clip_id).await {
            tracing::info!(clip_id = %clip_id, "Audio clip revoked");
            Ok(())
        } else {
            Err(SpeechServiceError::ClipNotFound)
        }
    }
}

impl SpeechService {
    /// Absent and empty text are rejected; anything else is forwarded as-is.
    fn require_text(request: SynthesisRequest) -> Result<String, SpeechServiceError> {
        request
            .text
            .filter(|text| !text.is_empty())
            .ok_or(SpeechServiceError::MissingText)
    }
}
