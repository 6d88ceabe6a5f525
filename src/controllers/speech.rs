use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path, Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::speech::{
        AudioUrlResponse, SpeechService, SpeechServiceApi, SpeechServiceError, SynthesisRequest,
        SynthesizedAudio, AUDIO_MPEG,
    },
    error::{AppError, AppResult},
};

pub const SPEECH_ROUTE: &str = "/api/speech";
pub const AUDIO_ROUTE_PREFIX: &str = "/api/speech/audio";

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
    public_base_url: Option<String>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>, public_base_url: Option<String>) -> Self {
        Self {
            speech_service,
            public_base_url,
        }
    }

    /// POST /api/speech - Convert text to speech
    ///
    /// Replies with `{ "audioUrl": ... }` pointing at a stored clip, or with
    /// the audio bytes themselves when the client asks for `audio/mpeg`.
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        headers: HeaderMap,
        payload: Result<Json<SynthesisRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unreadable speech request body");
                return Err(AppError::MissingText);
            }
        };

        if accepts_raw_audio(&headers) {
            let audio = controller.speech_service.synthesize(request).await?;
            return Ok(audio_response(audio));
        }

        let clip = controller.speech_service.synthesize_clip(request).await?;

        Ok(Json(AudioUrlResponse {
            audio_url: controller.audio_url(clip.id),
        })
        .into_response())
    }

    /// GET /api/speech/audio/{clipId} - Stream a stored clip
    pub async fn get_audio(
        State(controller): State<Arc<SpeechController>>,
        Path(clip_id): Path<String>,
    ) -> AppResult<Response> {
        let clip_id = parse_clip_id(&clip_id)?;
        let clip = controller.speech_service.find_clip(clip_id).await?;
        Ok(audio_response(clip.audio))
    }

    /// DELETE /api/speech/audio/{clipId} - Release a stored clip
    pub async fn revoke_audio(
        State(controller): State<Arc<SpeechController>>,
        Path(clip_id): Path<String>,
    ) -> AppResult<StatusCode> {
        let clip_id = parse_clip_id(&clip_id)?;
        controller.speech_service.revoke_clip(clip_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// Any method other than POST on /api/speech
    pub async fn method_not_allowed(method: Method) -> AppError {
        AppError::MethodNotAllowed(method.to_string())
    }

    fn audio_url(&self, clip_id: Uuid) -> String {
        let path = format!("{}/{}", AUDIO_ROUTE_PREFIX, clip_id);
        match &self.public_base_url {
            Some(base) => format!("{}{}", base, path),
            None => path,
        }
    }
}

/// Answers a bare `OPTIONS /api/speech` with the JSON 405.
///
/// Must sit outside the CORS layer, which would otherwise reply 200 to every
/// `OPTIONS`. Browser preflights carry `Access-Control-Request-Method` and are
/// passed through.
pub async fn reject_plain_options(request: Request, next: Next) -> Response {
    let is_plain_options = request.method() == Method::OPTIONS
        && request.uri().path() == SPEECH_ROUTE
        && !request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if is_plain_options {
        return AppError::MethodNotAllowed(Method::OPTIONS.to_string()).into_response();
    }

    next.run(request).await
}

/// True when some `Accept` entry names `audio/mpeg` without `q=0`.
fn accepts_raw_audio(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|entry| {
            let mut params = entry.split(';').map(str::trim);
            let media_type = params.next().unwrap_or_default();
            media_type.eq_ignore_ascii_case(AUDIO_MPEG) && !params.any(is_zero_quality)
        })
}

fn is_zero_quality(param: &str) -> bool {
    match param.split_once('=') {
        Some((name, value)) if name.trim().eq_ignore_ascii_case("q") => value
            .trim()
            .parse::<f32>()
            .map(|q| q <= 0.0)
            .unwrap_or(false),
        _ => false,
    }
}

fn parse_clip_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| SpeechServiceError::ClipNotFound.into())
}

fn audio_response(audio: SynthesizedAudio) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, audio.mime_type)],
        Body::from(audio.data),
    )
        .into_response()
}
