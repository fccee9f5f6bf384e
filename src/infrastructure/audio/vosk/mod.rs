#[cfg(feature = "vosk")]
mod native_model;
mod recognizer;
mod vosk_engine;

#[cfg(feature = "vosk")]
pub use native_model::VoskModel;
pub use recognizer::{RecognizedUtterance, RecognizedWord, RecognizerModel, RecognizerSession};
pub use vosk_engine::{CHUNK_SAMPLES, VoskEngine};
