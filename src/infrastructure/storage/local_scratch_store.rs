use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::application::ports::{ScratchStore, ScratchStoreError};
use crate::domain::ScratchFile;

/// Scratch files in a local directory, usually the OS temp dir.
pub struct LocalScratchStore {
    base_path: PathBuf,
}

impl LocalScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ScratchStoreError::Io)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    async fn copy_into(
        &self,
        file: &ScratchFile,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, ScratchStoreError> {
        // create_new: a name collision is an error, never a shared file.
        let mut out = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(file.path())
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(format!("create: {}", e)))?;

        let mut total_bytes: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(ScratchStoreError::Io)?;
            total_bytes += bytes.len() as u64;
            out.write_all(&bytes)
                .await
                .map_err(|e| ScratchStoreError::WriteFailed(format!("write: {}", e)))?;
        }

        out.flush()
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(format!("flush: {}", e)))?;

        Ok(total_bytes)
    }
}

#[async_trait::async_trait]
impl ScratchStore for LocalScratchStore {
    async fn materialize(
        &self,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<ScratchFile, ScratchStoreError> {
        let file = ScratchFile::allocate(&self.base_path);

        match self.copy_into(&file, stream).await {
            Ok(bytes) => {
                tracing::debug!(path = %file.path().display(), bytes = bytes, "Scratch file written");
                Ok(file)
            }
            Err(e) => {
                if let Err(cleanup) = fs::remove_file(file.path()).await {
                    if cleanup.kind() != io::ErrorKind::NotFound {
                        tracing::warn!(
                            path = %file.path().display(),
                            error = %cleanup,
                            "Failed to remove partially written scratch file"
                        );
                    }
                }
                Err(e)
            }
        }
    }

    async fn release(&self, file: ScratchFile) -> Result<(), ScratchStoreError> {
        match fs::remove_file(file.path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScratchStoreError::DeleteFailed(format!(
                "{}: {}",
                file.path().display(),
                e
            ))),
        }
    }
}
