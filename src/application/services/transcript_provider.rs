use std::io;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use futures::stream::BoxStream;

use crate::application::ports::{EngineFactory, ScratchStore, TranscriptionEngine};
use crate::domain::{EngineKind, ResultEnvelope, ScratchFile, TranscriptionResponse};

use super::transcription_failure::TranscriptionFailure;

/// Orchestrates one transcription: engine selection, scratch-file lifecycle,
/// engine invocation and result mapping.
///
/// Every failure is turned into a [`ResultEnvelope`]; nothing is retried.
pub struct TranscriptProvider {
    engines: Arc<dyn EngineFactory>,
    scratch_store: Arc<dyn ScratchStore>,
}

impl TranscriptProvider {
    pub fn new(engines: Arc<dyn EngineFactory>, scratch_store: Arc<dyn ScratchStore>) -> Self {
        Self {
            engines,
            scratch_store,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn transcribe_from_path(
        &self,
        file_path: &str,
        engine: &str,
    ) -> ResultEnvelope<TranscriptionResponse> {
        match self.run_from_path(file_path, engine).await {
            Ok(response) => ResultEnvelope::success(response),
            Err(failure) => {
                tracing::error!(
                    file_path = %file_path,
                    engine = %engine,
                    kind = ?failure.kind(),
                    error = %failure,
                    "Error transcribing file"
                );
                failure.into_envelope()
            }
        }
    }

    #[tracing::instrument(skip(self, stream))]
    pub async fn transcribe_from_stream(
        &self,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        file_name: &str,
        engine: &str,
    ) -> ResultEnvelope<TranscriptionResponse> {
        match self.run_from_stream(stream, file_name, engine).await {
            Ok(response) => ResultEnvelope::success(response),
            Err(failure) => {
                tracing::error!(
                    file_name = %file_name,
                    engine = %engine,
                    kind = ?failure.kind(),
                    error = %failure,
                    "Error transcribing uploaded file"
                );
                failure.into_envelope()
            }
        }
    }

    async fn run_from_path(
        &self,
        file_path: &str,
        engine: &str,
    ) -> Result<TranscriptionResponse, TranscriptionFailure> {
        let kind: EngineKind = engine.parse()?;
        let engine = self.engines.create(kind).await?;

        let path = Path::new(file_path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.to_string());

        transcribe_with(engine.as_ref(), path, file_name).await
    }

    async fn run_from_stream(
        &self,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        file_name: &str,
        engine: &str,
    ) -> Result<TranscriptionResponse, TranscriptionFailure> {
        let kind: EngineKind = engine.parse()?;
        let engine = self.engines.create(kind).await?;

        let scratch = self.scratch_store.materialize(stream).await?;
        tracing::debug!(
            scratch_id = %scratch.id(),
            path = %scratch.path().display(),
            "Upload materialized to scratch file"
        );

        // Nothing between materialize and release may return early.
        let outcome = transcribe_with(engine.as_ref(), scratch.path(), file_name.to_string()).await;
        self.release(scratch).await;

        outcome
    }

    async fn release(&self, scratch: ScratchFile) {
        let path = scratch.path().to_path_buf();
        if let Err(e) = self.scratch_store.release(scratch).await {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to delete scratch file"
            );
        }
    }
}

async fn transcribe_with(
    engine: &dyn TranscriptionEngine,
    audio_path: &Path,
    file_name: String,
) -> Result<TranscriptionResponse, TranscriptionFailure> {
    let result = engine.transcribe(audio_path).await?;

    tracing::info!(
        engine = %engine.kind(),
        file_name = %file_name,
        spans = result.spans.len(),
        chars = result.full_text.len(),
        "Transcription completed"
    );

    Ok(TranscriptionResponse::from_result(
        result,
        file_name,
        engine.kind(),
        Utc::now(),
    ))
}
