use std::path::Path;

use async_trait::async_trait;

use crate::domain::{EngineKind, TranscriptionResult};

/// Capability every speech-to-text engine provides: turn an audio file on
/// disk into full text plus timestamped spans.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    fn kind(&self) -> EngineKind;

    async fn transcribe(&self, audio_path: &Path)
    -> Result<TranscriptionResult, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscriptionError {
    /// True when the engine could not be brought up at all, as opposed to
    /// failing on this particular input.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ModelLoadFailed(_) | Self::EngineUnavailable(_))
    }
}
