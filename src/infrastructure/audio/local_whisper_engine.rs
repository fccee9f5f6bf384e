use std::path::{Path, PathBuf};

use async_trait::async_trait;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{EngineKind, TimestampedSpan, TranscriptionResult};

use super::wav;

const MAX_THREADS: usize = 4;

/// Whisper running in-process through whisper.cpp.
///
/// The GGML model is loaded for each call and dropped before the call
/// returns, so no native memory outlives a transcription.
#[derive(Debug)]
pub struct LocalWhisperEngine {
    model_path: PathBuf,
    language: Option<String>,
}

impl LocalWhisperEngine {
    pub fn new(model_path: &Path, language: Option<String>) -> Result<Self, TranscriptionError> {
        if !model_path.is_file() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "Whisper model not found at: {}",
                model_path.display()
            )));
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
            language,
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

#[async_trait]
impl TranscriptionEngine for LocalWhisperEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Whisper
    }

    async fn transcribe(
        &self,
        audio_path: &Path,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let model_path = self.model_path.clone();
        let language = self.language.clone();
        let audio_path = audio_path.to_path_buf();

        tokio::task::spawn_blocking(move || {
            run_inference(&model_path, language.as_deref(), &audio_path)
        })
        .await
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("inference task: {}", e)))?
    }
}

fn run_inference(
    model_path: &Path,
    language: Option<&str>,
    audio_path: &Path,
) -> Result<TranscriptionResult, TranscriptionError> {
    let samples = wav::read_mono_f32(audio_path)?;

    tracing::debug!(
        samples = samples.len(),
        duration_secs = samples.len() as f32 / wav::TARGET_SAMPLE_RATE as f32,
        "Transcribing audio with local Whisper"
    );

    let model = model_path.to_str().ok_or_else(|| {
        TranscriptionError::ModelLoadFailed("model path is not valid UTF-8".to_string())
    })?;
    let ctx = WhisperContext::new_with_params(model, WhisperContextParameters::default())
        .map_err(|e| TranscriptionError::ModelLoadFailed(format!("load model: {}", e)))?;
    let mut state = ctx
        .create_state()
        .map_err(|e| TranscriptionError::ModelLoadFailed(format!("create state: {}", e)))?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    params.set_language(language);
    params.set_translate(false);
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);
    params.set_n_threads(thread_count() as i32);

    state
        .full(params, &samples)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("inference: {}", e)))?;

    let mut texts = Vec::new();
    let mut spans = Vec::new();

    for i in 0..state.full_n_segments() {
        let Some(segment) = state.get_segment(i) else {
            continue;
        };
        let text = segment
            .to_str_lossy()
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("segment text: {}", e)))?;
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        // whisper.cpp timestamps are in centiseconds.
        let start = segment.start_timestamp() as f32 / 100.0;
        let end = segment.end_timestamp() as f32 / 100.0;

        texts.push(text.to_string());
        if let Some(span) = TimestampedSpan::new(text, start, end) {
            spans.push(span);
        }
    }

    Ok(TranscriptionResult::new(texts.join(" "), spans))
}

fn thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(MAX_THREADS)
}
