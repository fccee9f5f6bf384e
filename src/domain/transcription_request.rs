use bytes::Bytes;
use serde::Deserialize;

/// One transcription request; exactly one source variant is active.
#[derive(Debug, Clone)]
pub enum TranscriptionRequest {
    FileUpload(UploadRequest),
    PathReference(PathRequest),
}

impl TranscriptionRequest {
    pub fn engine(&self) -> &str {
        match self {
            Self::FileUpload(r) => &r.engine,
            Self::PathReference(r) => &r.engine,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub audio_file: Option<AudioUpload>,
    pub engine: String,
}

/// An uploaded audio payload as received from the client.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl AudioUpload {
    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathRequest {
    pub file_path: String,
    pub engine: String,
}
