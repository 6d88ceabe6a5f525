pub mod audio_clip_repository;
pub mod openai_speech_repository;
pub mod speech_repository;

pub use audio_clip_repository::AudioClipRepository;
pub use openai_speech_repository::OpenAiSpeechRepository;
pub use speech_repository::{SpeechRepository, SynthesisError};
