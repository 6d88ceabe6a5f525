pub mod service;

use serde::{Deserialize, Serialize};
pub use service::{BotService, BotServiceApi};

/// Request for POST /api/bot/text
#[derive(Debug, Serialize, Deserialize)]
pub struct TextPrompt {
    pub text: String,
}

/// Request for POST /api/bot/speech, carrying the client-side transcript
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechPrompt {
    pub speech: String,
}

/// Request for POST /api/bot/image
#[derive(Debug, Serialize, Deserialize)]
pub struct ImagePrompt {
    /// Image payload as sent by the client (typically a data URL)
    #[serde(default)]
    pub image: Option<String>,
}

/// Request for POST /api/bot/location
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationPrompt {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Bot,
}

/// Reply shown in the chat view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotMessage {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

impl BotMessage {
    pub fn bot(message: String) -> Self {
        Self {
            message,
            kind: MessageKind::Bot,
        }
    }
}
