use crate::application::ports::TranscriptionError;
use crate::domain::{TimestampedSpan, TranscriptionResult};

/// A loaded acoustic model that can open independent recognition sessions.
pub trait RecognizerModel: Send + Sync {
    fn new_session(&self, sample_rate: f32)
    -> Result<Box<dyn RecognizerSession>, TranscriptionError>;
}

/// Stateful recognizer fed with PCM chunks. One session per transcription.
pub trait RecognizerSession {
    fn accept_waveform(&mut self, samples: &[i16]) -> Result<(), TranscriptionError>;

    fn final_result(&mut self) -> Result<RecognizedUtterance, TranscriptionError>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognizedUtterance {
    pub text: String,
    pub words: Vec<RecognizedWord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedWord {
    pub word: String,
    pub start: f32,
    pub end: f32,
}

impl RecognizedUtterance {
    pub fn into_result(self) -> TranscriptionResult {
        let total = self.words.len();
        let spans: Vec<TimestampedSpan> = self
            .words
            .into_iter()
            .filter_map(|w| TimestampedSpan::new(w.word, w.start, w.end))
            .collect();

        if spans.len() < total {
            tracing::debug!(
                dropped = total - spans.len(),
                "Discarded words with empty text or invalid timing"
            );
        }

        TranscriptionResult::new(self.text, spans)
    }
}
