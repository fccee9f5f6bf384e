use std::path::Path;

use vosk::{CompleteResult, Model, Recognizer};

use crate::application::ports::TranscriptionError;

use super::recognizer::{RecognizedUtterance, RecognizedWord, RecognizerModel, RecognizerSession};

/// Vosk model backed by the native `libvosk` library.
pub struct VoskModel {
    model: Model,
}

impl VoskModel {
    pub fn load(model_dir: &Path) -> Result<Self, TranscriptionError> {
        if !model_dir.is_dir() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "Vosk model directory not found: {}",
                model_dir.display()
            )));
        }
        let dir = model_dir.to_str().ok_or_else(|| {
            TranscriptionError::ModelLoadFailed("model path is not valid UTF-8".to_string())
        })?;

        tracing::info!(path = %dir, "Loading Vosk model");

        let model = Model::new(dir).ok_or_else(|| {
            TranscriptionError::ModelLoadFailed(format!("failed to load Vosk model from {}", dir))
        })?;

        Ok(Self { model })
    }
}

impl RecognizerModel for VoskModel {
    fn new_session(
        &self,
        sample_rate: f32,
    ) -> Result<Box<dyn RecognizerSession>, TranscriptionError> {
        let mut recognizer = Recognizer::new(&self.model, sample_rate).ok_or_else(|| {
            TranscriptionError::ModelLoadFailed("failed to create Vosk recognizer".to_string())
        })?;
        recognizer.set_words(true);
        Ok(Box::new(VoskSession { recognizer }))
    }
}

struct VoskSession {
    recognizer: Recognizer,
}

impl RecognizerSession for VoskSession {
    fn accept_waveform(&mut self, samples: &[i16]) -> Result<(), TranscriptionError> {
        self.recognizer
            .accept_waveform(samples)
            .map(|_| ())
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("accept waveform: {:?}", e)))
    }

    fn final_result(&mut self) -> Result<RecognizedUtterance, TranscriptionError> {
        match self.recognizer.final_result() {
            CompleteResult::Single(single) => Ok(RecognizedUtterance {
                text: single.text.to_string(),
                words: single
                    .result
                    .iter()
                    .map(|w| RecognizedWord {
                        word: w.word.to_string(),
                        start: w.start,
                        end: w.end,
                    })
                    .collect(),
            }),
            CompleteResult::Multiple(_) => Err(TranscriptionError::TranscriptionFailed(
                "recognizer returned alternatives instead of a single result".to_string(),
            )),
        }
    }
}
