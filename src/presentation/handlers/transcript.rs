use axum::Json;
use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::{
    AudioUpload, FailureKind, PathRequest, ResultEnvelope, TranscriptionResponse, UploadRequest,
};
use crate::presentation::state::AppState;

const AUDIO_FILE_FIELD: &str = "audiofile";
const ENGINE_FIELD: &str = "engine";
const FALLBACK_FILE_NAME: &str = "audio.wav";

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_file_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected non-multipart upload");
            return rejection_response(rejection.status(), rejection.body_text());
        }
    };

    let request = match read_upload(&mut multipart).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return rejection_response(e.status(), format!("Failed to read multipart: {}", e));
        }
    };

    let envelope = state.transcription_service.transcribe_upload(request).await;
    envelope_response(envelope)
}

#[tracing::instrument(skip(state, body))]
pub async fn transcribe_path_handler(
    State(state): State<AppState>,
    body: Result<Json<PathRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(r)) => r,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected malformed path request");
            return rejection_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let envelope = state.transcription_service.transcribe_path(request).await;
    envelope_response(envelope)
}

/// Collects the `audioFile` and `engine` parts, matching names without
/// regard to case. Unknown parts are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<UploadRequest, MultipartError> {
    let mut request = UploadRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_ascii_lowercase();
        match name.as_str() {
            AUDIO_FILE_FIELD => request.audio_file = Some(read_audio(field).await?),
            ENGINE_FIELD => request.engine = field.text().await?,
            other => tracing::debug!(field = %other, "Ignoring multipart field"),
        }
    }

    Ok(request)
}

async fn read_audio(field: Field<'_>) -> Result<AudioUpload, MultipartError> {
    let file_name = field
        .file_name()
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_FILE_NAME)
        .to_string();
    let content_type = field.content_type().unwrap_or_default().to_string();
    let data = field.bytes().await?;

    tracing::debug!(file_name = %file_name, content_type = %content_type, bytes = data.len(), "File data received");

    Ok(AudioUpload {
        file_name,
        content_type,
        data,
    })
}

fn envelope_response(envelope: ResultEnvelope<TranscriptionResponse>) -> Response {
    let status = if envelope.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(envelope)).into_response()
}

fn rejection_response(status: StatusCode, message: String) -> Response {
    let envelope: ResultEnvelope<TranscriptionResponse> =
        ResultEnvelope::failure(FailureKind::ValidationFailed, vec![message]);
    (status, Json(envelope)).into_response()
}
