use super::{BotMessage, ImagePrompt, LocationPrompt, SpeechPrompt, TextPrompt};
use async_trait::async_trait;
use std::time::Duration;

const NEARBY_LANDMARK: &str =
    "The Great Tower, a place with rich history and stunning views.";

/// Canned replies for the chat view, delayed to mimic a real backend
pub struct BotService {
    response_delay: Duration,
}

impl BotService {
    pub fn new(response_delay: Duration) -> Self {
        Self { response_delay }
    }

    async fn reply(&self, message: String) -> BotMessage {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }
        BotMessage::bot(message)
    }
}

#[async_trait]
pub trait BotServiceApi: Send + Sync {
    async fn text_reply(&self, prompt: TextPrompt) -> BotMessage;

    async fn speech_reply(&self, prompt: SpeechPrompt) -> BotMessage;

    async fn describe_image(&self, prompt: ImagePrompt) -> BotMessage;

    async fn describe_location(&self, prompt: LocationPrompt) -> BotMessage;
}

#[async_trait]
impl BotServiceApi for BotService {
    async fn text_reply(&self, prompt: TextPrompt) -> BotMessage {
        self.reply(format!(
            "You said: \"{}\". This is a simulated bot response.",
            prompt.text
        ))
        .await
    }

    async fn speech_reply(&self, prompt: SpeechPrompt) -> BotMessage {
        self.reply(format!(
            "You spoke: \"{}\". This is a simulated bot response.",
            prompt.speech
        ))
        .await
    }

    async fn describe_image(&self, prompt: ImagePrompt) -> BotMessage {
        tracing::debug!(
            image_size = prompt.image.as_ref().map(String::len).unwrap_or(0),
            "Image description requested"
        );
        self.reply(
            "This is a description of the photo you uploaded: A beautiful landmark!".to_string(),
        )
        .await
    }

    async fn describe_location(&self, prompt: LocationPrompt) -> BotMessage {
        self.reply(format!(
            "You're at coordinates ({}, {}). Here's a nearby landmark: {}",
            prompt.latitude, prompt.longitude, NEARBY_LANDMARK
        ))
        .await
    }
}
