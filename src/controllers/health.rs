use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::AudioClipRepository;

pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Tour Guide API is running!")
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(clip_repo): State<Arc<AudioClipRepository>>) -> impl IntoResponse {
    let audio_clips = clip_repo.count().await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts": "configured",
            "audio_clips": audio_clips
        })),
    )
}
