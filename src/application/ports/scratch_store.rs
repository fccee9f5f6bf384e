use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::ScratchFile;

/// Materializes uploaded audio to local scratch files and removes them again.
#[async_trait::async_trait]
pub trait ScratchStore: Send + Sync {
    /// Copies the whole stream into a freshly allocated scratch file.
    async fn materialize(
        &self,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<ScratchFile, ScratchStoreError>;

    async fn release(&self, file: ScratchFile) -> Result<(), ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("scratch write failed: {0}")]
    WriteFailed(String),
    #[error("scratch delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
