use std::io;

use bytes::Bytes;
use futures::stream::{self, StreamExt};

use crate::domain::{
    AudioUpload, PathRequest, ResultEnvelope, TranscriptionRequest, TranscriptionResponse, UploadRequest,
};

use super::request_validator::RequestValidator;
use super::transcript_provider::TranscriptProvider;
use super::transcription_failure::TranscriptionFailure;

/// Pipeline entry point: validates a request and, only if it passes, hands it
/// to the [`TranscriptProvider`].
pub struct TranscriptionService {
    validator: RequestValidator,
    provider: TranscriptProvider,
}

impl TranscriptionService {
    pub fn new(validator: RequestValidator, provider: TranscriptProvider) -> Self {
        Self {
            validator,
            provider,
        }
    }

    pub fn validator(&self) -> &RequestValidator {
        &self.validator
    }

    pub async fn handle(&self, request: TranscriptionRequest) -> ResultEnvelope<TranscriptionResponse> {
        match request {
            TranscriptionRequest::FileUpload(upload) => self.transcribe_upload(upload).await,
            TranscriptionRequest::PathReference(path) => self.transcribe_path(path).await,
        }
    }

    pub async fn transcribe_upload(
        &self,
        request: UploadRequest,
    ) -> ResultEnvelope<TranscriptionResponse> {
        let errors = self.validator.validate_upload(&request);
        if !errors.is_empty() {
            tracing::warn!(errors = ?errors, "Upload request rejected by validation");
            return TranscriptionFailure::ValidationFailed(errors).into_envelope();
        }

        let Some(audio) = request.audio_file else {
            return TranscriptionFailure::ValidationFailed(Vec::new()).into_envelope();
        };

        tracing::info!(
            file_name = %audio.file_name,
            bytes = audio.size_bytes(),
            engine = %request.engine,
            "Processing file transcription"
        );

        let AudioUpload {
            file_name, data, ..
        } = audio;
        let body = stream::once(async move { Ok::<Bytes, io::Error>(data) }).boxed();
        self.provider
            .transcribe_from_stream(body, &file_name, &request.engine)
            .await
    }

    pub async fn transcribe_path(
        &self,
        request: PathRequest,
    ) -> ResultEnvelope<TranscriptionResponse> {
        let errors = self.validator.validate_path(&request);
        if !errors.is_empty() {
            tracing::warn!(errors = ?errors, "Path request rejected by validation");
            return TranscriptionFailure::ValidationFailed(errors).into_envelope();
        }

        tracing::info!(
            file_path = %request.file_path,
            engine = %request.engine,
            "Processing path transcription"
        );

        self.provider
            .transcribe_from_path(&request.file_path, &request.engine)
            .await
    }
}
