pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{AudioUrlResponse, SynthesisRequest};
pub use error::SpeechServiceError;
pub use model::{AudioClip, SynthesizedAudio, AUDIO_MPEG};
pub use service::{SpeechService, SpeechServiceApi};
