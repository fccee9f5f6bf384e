use std::fmt;
use std::str::FromStr;

/// Speech-to-text engines the service can route a request to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Local acoustic-model recognizer. Spans are single words.
    Vosk,
    /// Whisper, remote API or local GGML model. Spans are whole segments.
    Whisper,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Whisper, EngineKind::Vosk];

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Vosk => "vosk",
            EngineKind::Whisper => "whisper",
        }
    }
}

impl FromStr for EngineKind {
    type Err = UnknownEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vosk" => Ok(Self::Vosk),
            "whisper" => Ok(Self::Whisper),
            _ => Err(UnknownEngineError(s.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown engine: {0}")]
pub struct UnknownEngineError(pub String);
