use std::path::Path;

use crate::domain::{EngineKind, PathRequest, UploadRequest};

/// 100 MB, counted in binary megabytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

pub const SUPPORTED_CONTENT_TYPES: [&str; 3] = ["audio/wav", "audio/x-wav", "audio/wave"];

const SUPPORTED_EXTENSION: &str = "wav";

pub const AUDIO_FILE_REQUIRED: &str = "Audio file is required";
pub const FILE_TOO_LARGE: &str = "File size must not exceed 100MB";
pub const UNSUPPORTED_CONTENT_TYPE: &str = "Only WAV audio files are supported";
pub const FILE_PATH_REQUIRED: &str = "File path is required";
pub const FILE_DOES_NOT_EXIST: &str = "File does not exist";
pub const UNSUPPORTED_EXTENSION: &str = "Only WAV files are supported";
pub const ENGINE_REQUIRED: &str = "Engine is required";
pub const ENGINE_NOT_SUPPORTED: &str = "Engine must be 'whisper' or 'vosk'";

/// Declarative input rules checked before any engine work starts.
///
/// Every applicable rule is evaluated and all messages are returned in rule
/// order. The request is never modified.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    max_upload_bytes: u64,
}

impl RequestValidator {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self { max_upload_bytes }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    pub fn validate_upload(&self, request: &UploadRequest) -> Vec<String> {
        let mut errors = Vec::new();

        match &request.audio_file {
            None => errors.push(AUDIO_FILE_REQUIRED.to_string()),
            Some(audio) => {
                if audio.size_bytes() > self.max_upload_bytes {
                    errors.push(FILE_TOO_LARGE.to_string());
                }
                if !is_supported_content_type(&audio.content_type) {
                    errors.push(UNSUPPORTED_CONTENT_TYPE.to_string());
                }
            }
        }

        check_engine(&request.engine, &mut errors);
        errors
    }

    pub fn validate_path(&self, request: &PathRequest) -> Vec<String> {
        let mut errors = Vec::new();

        if request.file_path.trim().is_empty() {
            errors.push(FILE_PATH_REQUIRED.to_string());
        } else {
            let path = Path::new(&request.file_path);
            if !path.is_file() {
                errors.push(FILE_DOES_NOT_EXIST.to_string());
            }
            if !has_supported_extension(path) {
                errors.push(UNSUPPORTED_EXTENSION.to_string());
            }
        }

        check_engine(&request.engine, &mut errors);
        errors
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

fn check_engine(engine: &str, errors: &mut Vec<String>) {
    if engine.trim().is_empty() {
        errors.push(ENGINE_REQUIRED.to_string());
    } else if engine.parse::<EngineKind>().is_err() {
        errors.push(ENGINE_NOT_SUPPORTED.to_string());
    }
}

fn is_supported_content_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    SUPPORTED_CONTENT_TYPES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(essence))
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SUPPORTED_EXTENSION))
}
