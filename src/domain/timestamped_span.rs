/// A timestamped piece of recognized text.
///
/// Granularity depends on the engine: a single word for Vosk, a full spoken
/// segment for Whisper. Callers must not assume word granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampedSpan {
    pub text: String,
    pub start_seconds: f32,
    pub end_seconds: f32,
}

impl TimestampedSpan {
    /// Returns `None` for blank text, a negative start, or `end <= start`.
    pub fn new(text: impl Into<String>, start_seconds: f32, end_seconds: f32) -> Option<Self> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() || !(start_seconds >= 0.0) || !(end_seconds > start_seconds) {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            start_seconds,
            end_seconds,
        })
    }

    pub fn duration_seconds(&self) -> f32 {
        self.end_seconds - self.start_seconds
    }
}
