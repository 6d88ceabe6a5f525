use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::bot::{
        BotMessage, BotService, BotServiceApi, ImagePrompt, LocationPrompt, SpeechPrompt,
        TextPrompt,
    },
    error::{AppError, AppResult},
};

pub struct BotController {
    bot_service: Arc<BotService>,
}

impl BotController {
    pub fn new(bot_service: Arc<BotService>) -> Self {
        Self { bot_service }
    }

    /// POST /api/bot/text
    pub async fn text(
        State(controller): State<Arc<BotController>>,
        payload: Result<Json<TextPrompt>, JsonRejection>,
    ) -> AppResult<Json<BotMessage>> {
        let prompt = read_body(payload)?;
        Ok(Json(controller.bot_service.text_reply(prompt).await))
    }

    /// POST /api/bot/speech
    pub async fn speech(
        State(controller): State<Arc<BotController>>,
        payload: Result<Json<SpeechPrompt>, JsonRejection>,
    ) -> AppResult<Json<BotMessage>> {
        let prompt = read_body(payload)?;
        Ok(Json(controller.bot_service.speech_reply(prompt).await))
    }

    /// POST /api/bot/image
    pub async fn image(
        State(controller): State<Arc<BotController>>,
        payload: Result<Json<ImagePrompt>, JsonRejection>,
    ) -> AppResult<Json<BotMessage>> {
        let prompt = read_body(payload)?;
        Ok(Json(controller.bot_service.describe_image(prompt).await))
    }

    /// POST /api/bot/location
    pub async fn location(
        State(controller): State<Arc<BotController>>,
        payload: Result<Json<LocationPrompt>, JsonRejection>,
    ) -> AppResult<Json<BotMessage>> {
        let prompt = read_body(payload)?;
        Ok(Json(controller.bot_service.describe_location(prompt).await))
    }
}

fn read_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| {
            tracing::debug!(error = %rejection, "Unreadable bot request body");
            AppError::BadRequest("Invalid request body".to_string())
        })
}
