use crate::domain::speech::SynthesizedAudio;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The provider answered with anything other than 200 OK
    #[error("speech provider returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never completed (connect, send or body read failed)
    #[error("speech provider request failed: {0}")]
    Transport(String),
}

/// Repository for text-to-speech synthesis.
/// Abstracts the underlying speech provider so the service can be exercised
/// without the network.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize `text` into a single audio payload (MP3)
    ///
    /// # Errors
    /// Returns [`SynthesisError::Upstream`] for a non-200 provider response and
    /// [`SynthesisError::Transport`] when the call itself fails. Callers must
    /// not retry.
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SynthesisError>;
}
