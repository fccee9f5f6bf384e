mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AuthSettings, EngineSettings, LoggingSettings, ScratchSettings, ServerSettings, Settings,
    ValidationSettings, VoskSettings, WhisperSettings,
};
