mod engine_kind;
mod result_envelope;
mod scratch_file;
mod timestamped_span;
mod transcription_request;
mod transcription_response;
mod transcription_result;

pub use engine_kind::{EngineKind, UnknownEngineError};
pub use result_envelope::{FailureKind, ResultEnvelope};
pub use scratch_file::ScratchFile;
pub use timestamped_span::TimestampedSpan;
pub use transcription_request::{AudioUpload, PathRequest, TranscriptionRequest, UploadRequest};
pub use transcription_response::{TranscriptionResponse, WordTimestamp};
pub use transcription_result::TranscriptionResult;
