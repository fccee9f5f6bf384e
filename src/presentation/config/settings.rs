use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::DEFAULT_MAX_UPLOAD_BYTES;
use crate::infrastructure::audio::DEFAULT_MODEL;

use super::environment::Environment;

const BASE_SETTINGS_FILE: &str = "appsettings";
const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

/// Upload limit plus headroom for multipart framing, so a file right at the
/// validation limit still reaches the validator.
const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 101 * 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub engines: EngineSettings,
    pub validation: ValidationSettings,
    pub scratch: ScratchSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.<Environment>.toml` and
    /// `APP__SECTION__KEY` environment variables, later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(BASE_SETTINGS_FILE).required(false))
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_request_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_request_body_bytes: DEFAULT_MAX_REQUEST_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Shared secret expected in `X-API-Key`. Unset rejects every gated request.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub vosk: VoskSettings,
    pub whisper: WhisperSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoskSettings {
    pub model_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WhisperSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    /// When set, Whisper runs locally from this GGML file instead of the API.
    pub local_model_path: Option<String>,
    pub language: Option<String>,
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            local_model_path: None,
            language: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub max_upload_bytes: u64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScratchSettings {
    pub directory: Option<String>,
}

impl ScratchSettings {
    pub fn directory_path(&self) -> PathBuf {
        self.directory
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}
