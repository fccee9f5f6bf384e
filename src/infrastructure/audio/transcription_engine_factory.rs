use async_trait::async_trait;

use crate::application::ports::{EngineFactory, TranscriptionEngine, TranscriptionError};
use crate::domain::EngineKind;
use crate::presentation::config::EngineSettings;

use super::openai_whisper_engine::OpenAiWhisperEngine;

/// Builds engines per request from the configured [`EngineSettings`].
pub struct TranscriptionEngineFactory {
    settings: EngineSettings,
}

impl TranscriptionEngineFactory {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    async fn create_vosk(&self) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError> {
        let model_path = non_blank(self.settings.vosk.model_path.as_deref()).ok_or_else(|| {
            TranscriptionError::EngineUnavailable("Vosk model path is not configured".to_string())
        })?;
        load_vosk(model_path).await
    }

    fn create_whisper(&self) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError> {
        let whisper = &self.settings.whisper;

        if let Some(model_path) = non_blank(whisper.local_model_path.as_deref()) {
            return load_local_whisper(model_path, whisper.language.clone());
        }

        let api_key = non_blank(whisper.api_key.as_deref()).ok_or_else(|| {
            TranscriptionError::EngineUnavailable(
                "Whisper requires an API key or a local model path".to_string(),
            )
        })?;

        Ok(Box::new(OpenAiWhisperEngine::new(
            api_key.to_string(),
            whisper.base_url.clone(),
            Some(whisper.model.clone()),
        )))
    }
}

#[async_trait]
impl EngineFactory for TranscriptionEngineFactory {
    async fn create(
        &self,
        kind: EngineKind,
    ) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError> {
        tracing::debug!(engine = %kind, "Constructing transcription engine");
        match kind {
            EngineKind::Vosk => self.create_vosk().await,
            EngineKind::Whisper => self.create_whisper(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(feature = "vosk")]
async fn load_vosk(model_path: &str) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError> {
    let engine = super::vosk::VoskEngine::load(std::path::Path::new(model_path)).await?;
    Ok(Box::new(engine))
}

#[cfg(not(feature = "vosk"))]
async fn load_vosk(_model_path: &str) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError> {
    Err(TranscriptionError::EngineUnavailable(
        "Vosk support is not compiled in (build with --features vosk)".to_string(),
    ))
}

#[cfg(feature = "local-whisper")]
fn load_local_whisper(
    model_path: &str,
    language: Option<String>,
) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError> {
    let engine =
        super::local_whisper_engine::LocalWhisperEngine::new(std::path::Path::new(model_path), language)?;
    Ok(Box::new(engine))
}

#[cfg(not(feature = "local-whisper"))]
fn load_local_whisper(
    _model_path: &str,
    _language: Option<String>,
) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError> {
    Err(TranscriptionError::EngineUnavailable(
        "local Whisper support is not compiled in (build with --features local-whisper)"
            .to_string(),
    ))
}
