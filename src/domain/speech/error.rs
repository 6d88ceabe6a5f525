use crate::error::AppError;
use crate::infrastructure::repositories::SynthesisError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("text is required")]
    MissingText,
    #[error("speech provider responded with status {status}")]
    Upstream { status: u16 },
    #[error("speech provider unreachable: {0}")]
    Transport(String),
    #[error("audio clip not found")]
    ClipNotFound,
}

impl From<SynthesisError> for SpeechServiceError {
    fn from(err: SynthesisError) -> Self {
        match err {
            SynthesisError::Upstream { status, .. } => SpeechServiceError::Upstream { status },
            SynthesisError::Transport(msg) => SpeechServiceError::Transport(msg),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::MissingText => AppError::MissingText,
            SpeechServiceError::Upstream { status } => AppError::Upstream { status },
            SpeechServiceError::Transport(msg) => AppError::Transport(msg),
            SpeechServiceError::ClipNotFound => AppError::NotFound("Audio not found".to_string()),
        }
    }
}
