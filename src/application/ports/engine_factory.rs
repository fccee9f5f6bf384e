use async_trait::async_trait;

use crate::domain::EngineKind;

use super::transcription_engine::{TranscriptionEngine, TranscriptionError};

/// Builds a ready-to-use engine for an already resolved [`EngineKind`].
///
/// Construction parameters come from service configuration, never from the
/// request.
#[async_trait]
pub trait EngineFactory: Send + Sync {
    async fn create(
        &self,
        kind: EngineKind,
    ) -> Result<Box<dyn TranscriptionEngine>, TranscriptionError>;
}
