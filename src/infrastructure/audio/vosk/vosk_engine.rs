use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{EngineKind, TranscriptionResult};
use crate::infrastructure::audio::wav::{self, TARGET_SAMPLE_RATE};

use super::recognizer::RecognizerModel;

/// 4096 bytes of 16-bit PCM per recognizer call.
pub const CHUNK_SAMPLES: usize = 2048;

/// Local acoustic-model engine producing one span per recognized word.
pub struct VoskEngine {
    model: Arc<dyn RecognizerModel>,
}

impl VoskEngine {
    pub fn new(model: Arc<dyn RecognizerModel>) -> Self {
        Self { model }
    }

    /// Loads a Vosk model directory on the blocking pool.
    #[cfg(feature = "vosk")]
    pub async fn load(model_dir: &Path) -> Result<Self, TranscriptionError> {
        let dir = model_dir.to_path_buf();
        let model = tokio::task::spawn_blocking(move || super::VoskModel::load(&dir))
            .await
            .map_err(|e| TranscriptionError::ModelLoadFailed(format!("loader task: {}", e)))??;
        Ok(Self::new(Arc::new(model)))
    }
}

#[async_trait]
impl TranscriptionEngine for VoskEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Vosk
    }

    async fn transcribe(
        &self,
        audio_path: &Path,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let model = Arc::clone(&self.model);
        let path = audio_path.to_path_buf();

        tracing::debug!(path = %path.display(), "Running Vosk recognition");

        tokio::task::spawn_blocking(move || recognize_file(model.as_ref(), &path))
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("recognizer task: {}", e)))?
    }
}

fn recognize_file(
    model: &dyn RecognizerModel,
    path: &Path,
) -> Result<TranscriptionResult, TranscriptionError> {
    let mut reader = wav::open_wav(path)?;
    wav::require_recognizer_format(reader.spec())?;

    let mut session = model.new_session(TARGET_SAMPLE_RATE as f32)?;
    let mut chunk: Vec<i16> = Vec::with_capacity(CHUNK_SAMPLES);
    let mut chunks = 0usize;

    for sample in reader.samples::<i16>() {
        chunk.push(sample.map_err(wav::decode_error)?);
        if chunk.len() == CHUNK_SAMPLES {
            session.accept_waveform(&chunk)?;
            chunk.clear();
            chunks += 1;
        }
    }
    if !chunk.is_empty() {
        session.accept_waveform(&chunk)?;
        chunks += 1;
    }

    let utterance = session.final_result()?;

    tracing::debug!(
        chunks = chunks,
        words = utterance.words.len(),
        "Vosk recognition finished"
    );

    Ok(utterance.into_result())
}
