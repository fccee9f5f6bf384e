mod request_validator;
mod transcript_provider;
mod transcription_failure;
mod transcription_service;

pub use request_validator::{
    AUDIO_FILE_REQUIRED, DEFAULT_MAX_UPLOAD_BYTES, ENGINE_NOT_SUPPORTED, ENGINE_REQUIRED,
    FILE_DOES_NOT_EXIST, FILE_PATH_REQUIRED, FILE_TOO_LARGE, RequestValidator,
    SUPPORTED_CONTENT_TYPES, UNSUPPORTED_CONTENT_TYPE, UNSUPPORTED_EXTENSION,
};
pub use transcript_provider::TranscriptProvider;
pub use transcription_failure::TranscriptionFailure;
pub use transcription_service::TranscriptionService;
