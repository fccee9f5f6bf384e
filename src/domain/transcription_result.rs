use super::timestamped_span::TimestampedSpan;

/// Engine-native transcription output, owned by the call that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranscriptionResult {
    pub full_text: String,
    pub spans: Vec<TimestampedSpan>,
}

impl TranscriptionResult {
    pub fn new(full_text: impl Into<String>, mut spans: Vec<TimestampedSpan>) -> Self {
        // Stable: spans sharing a start time keep engine order.
        spans.sort_by(|a, b| a.start_seconds.total_cmp(&b.start_seconds));
        Self {
            full_text: full_text.into().trim().to_string(),
            spans,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty() && self.spans.is_empty()
    }
}
