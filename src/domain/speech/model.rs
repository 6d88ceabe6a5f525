use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Binary audio returned by the speech provider
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub data: Bytes,
    pub mime_type: &'static str,
}

impl SynthesizedAudio {
    pub fn mpeg(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            mime_type: AUDIO_MPEG,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Synthesized audio held in the clip store, addressable by `id`
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub id: Uuid,
    pub audio: SynthesizedAudio,
    pub created_at: DateTime<Utc>,
}
