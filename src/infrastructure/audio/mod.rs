#[cfg(feature = "local-whisper")]
mod local_whisper_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;
pub mod vosk;
pub mod wav;

#[cfg(feature = "local-whisper")]
pub use local_whisper_engine::LocalWhisperEngine;
pub use openai_whisper_engine::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiWhisperEngine};
pub use transcription_engine_factory::TranscriptionEngineFactory;
