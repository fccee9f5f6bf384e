use crate::application::ports::{ScratchStoreError, TranscriptionError};
use crate::domain::{FailureKind, ResultEnvelope, UnknownEngineError};

/// Every way a pipeline operation can fail, as seen from the caller.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionFailure {
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
    #[error(transparent)]
    UnknownEngine(#[from] UnknownEngineError),
    #[error("Transcription failed: {0}")]
    EngineUnavailable(#[source] TranscriptionError),
    #[error("Transcription failed: {0}")]
    EngineExecutionFailed(#[source] TranscriptionError),
    #[error("Transcription failed: {0}")]
    ResourceIoFailed(#[from] ScratchStoreError),
}

impl TranscriptionFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ValidationFailed(_) => FailureKind::ValidationFailed,
            Self::UnknownEngine(_) => FailureKind::UnknownEngine,
            Self::EngineUnavailable(_) => FailureKind::EngineUnavailable,
            Self::EngineExecutionFailed(_) => FailureKind::EngineExecutionFailed,
            Self::ResourceIoFailed(_) => FailureKind::ResourceIoFailed,
        }
    }

    /// Human-readable messages placed into the envelope's `errors`.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }

    pub fn into_envelope<T>(self) -> ResultEnvelope<T> {
        ResultEnvelope::failure(self.kind(), self.messages())
    }
}

impl From<TranscriptionError> for TranscriptionFailure {
    fn from(error: TranscriptionError) -> Self {
        if error.is_unavailable() {
            Self::EngineUnavailable(error)
        } else {
            Self::EngineExecutionFailed(error)
        }
    }
}
