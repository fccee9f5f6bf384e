use chrono::{DateTime, Utc};
use serde::Serialize;

use super::engine_kind::EngineKind;
use super::transcription_result::TranscriptionResult;

/// Wire-facing transcription payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionResponse {
    pub file_name: String,
    pub full_text: String,
    /// Word-level for Vosk, segment-level for Whisper.
    pub words: Vec<WordTimestamp>,
    pub engine: String,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTimestamp {
    pub word: String,
    pub start_time: f32,
    pub end_time: f32,
}

impl TranscriptionResponse {
    pub fn from_result(
        result: TranscriptionResult,
        file_name: impl Into<String>,
        engine: EngineKind,
        processed_at: DateTime<Utc>,
    ) -> Self {
        let words = result
            .spans
            .into_iter()
            .map(|span| WordTimestamp {
                word: span.text,
                start_time: span.start_seconds,
                end_time: span.end_seconds,
            })
            .collect();

        Self {
            file_name: file_name.into(),
            full_text: result.full_text,
            words,
            engine: engine.as_str().to_string(),
            processed_at,
        }
    }
}
