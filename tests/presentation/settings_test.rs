use transcript_service::application::services::DEFAULT_MAX_UPLOAD_BYTES;
use transcript_service::presentation::config::{Environment, Settings};

#[test]
fn given_no_overrides_when_defaulting_then_uses_documented_limits() {
    let settings = Settings::default();

    assert_eq!(settings.validation.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    assert_eq!(settings.server.max_request_body_bytes, 101 * 1024 * 1024);
    assert_eq!(settings.engines.whisper.model, "whisper-1");
    assert!(settings.auth.api_key.is_none());
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn given_no_scratch_directory_when_resolving_then_uses_temp_dir() {
    let settings = Settings::default();

    assert_eq!(settings.scratch.directory_path(), std::env::temp_dir());
}

#[test]
fn given_environment_names_when_parsing_then_accepts_aliases() {
    assert_eq!(
        Environment::try_from("Production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("development".to_string()),
        Ok(Environment::Local)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_naming_settings_file_then_appends_environment() {
    assert_eq!(Environment::Test.settings_file(), "appsettings.Test");
}

#[test]
fn given_base_settings_file_when_loading_then_every_section_resolves() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert!(settings.server.port > 0);
    assert!(settings.validation.max_upload_bytes > 0);
}
