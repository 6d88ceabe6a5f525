use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::shared::error_dto::ErrorResponse;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests are allowed";
pub const TEXT_REQUIRED_MESSAGE: &str = "Text is required";
pub const TTS_FAILED_MESSAGE: &str = "Failed to fetch TTS audio";

/// Main application error type
///
/// The `Display` text carries internal details and is only logged. Clients
/// receive [`AppError::public_message`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Text is required")]
    MissingText,

    #[error("Upstream speech provider responded with status {status}")]
    Upstream { status: u16 },

    #[error("Speech provider transport error: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingText | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } | Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller
    pub fn public_message(&self) -> String {
        match self {
            Self::MethodNotAllowed(_) => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            Self::MissingText => TEXT_REQUIRED_MESSAGE.to_string(),
            Self::Upstream { .. } | Self::Transport(_) => TTS_FAILED_MESSAGE.to_string(),
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.clone(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.public_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                status = %status.as_u16(),
                "Request failed"
            );
        } else {
            tracing::warn!(
                error = %self,
                status = %status.as_u16(),
                "Request rejected"
            );
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
