use serde::{Deserialize, Serialize};

/// Request for POST /api/speech
///
/// `text` stays optional so a missing field is reported as
/// "Text is required" instead of a deserialization failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SynthesisRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Successful response for POST /api/speech
#[derive(Debug, Serialize, Deserialize)]
pub struct AudioUrlResponse {
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
}
