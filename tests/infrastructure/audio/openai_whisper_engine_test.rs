use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;

use transcript_service::application::ports::{TranscriptionEngine, TranscriptionError};
use transcript_service::domain::EngineKind;
use transcript_service::infrastructure::audio::OpenAiWhisperEngine;

use crate::helpers::build_wav;

#[derive(Clone)]
struct MockApi {
    status: StatusCode,
    body: &'static str,
    authorization: Arc<Mutex<Option<String>>>,
}

async fn transcriptions(State(api): State<MockApi>, headers: HeaderMap) -> impl IntoResponse {
    *api.authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (
        api.status,
        [("content-type", "application/json")],
        api.body,
    )
}

/// Starts an in-process stand-in for the transcription API and returns its base URL.
async fn spawn_mock_api(api: MockApi) -> String {
    let app = Router::new()
        .route("/v1/audio/transcriptions", post(transcriptions))
        .with_state(api);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

fn mock_api(status: StatusCode, body: &'static str) -> MockApi {
    MockApi {
        status,
        body,
        authorization: Arc::new(Mutex::new(None)),
    }
}

const VERBOSE_RESPONSE: &str = r#"{
    "text": "Hello there. General Kenobi.",
    "segments": [
        {"id": 1, "text": " General Kenobi.", "start": 1.5, "end": 3.0},
        {"id": 0, "text": " Hello there.", "start": 0.0, "end": 1.5}
    ]
}"#;

#[tokio::test]
async fn given_verbose_response_when_transcribing_then_returns_segment_spans() {
    let api = mock_api(StatusCode::OK, VERBOSE_RESPONSE);
    let base_url = spawn_mock_api(api.clone()).await;
    let dir = tempfile::TempDir::new().unwrap();
    let audio = build_wav(dir.path(), "clip.wav", 16_000, 1, &[0; 160]);
    let engine = OpenAiWhisperEngine::new("sk-test".to_string(), Some(base_url), None);

    let result = engine.transcribe(&audio).await.unwrap();

    assert_eq!(engine.kind(), EngineKind::Whisper);
    assert_eq!(result.spans.len(), 2);
    assert_eq!(result.spans[0].text, "Hello there.");
    assert_eq!(result.spans[1].start_seconds, 1.5);
    assert_eq!(result.full_text, "General Kenobi. Hello there.");
    assert_eq!(
        api.authorization.lock().unwrap().as_deref(),
        Some("Bearer sk-test")
    );
}

#[tokio::test]
async fn given_response_without_segments_when_transcribing_then_uses_text() {
    let api = mock_api(StatusCode::OK, r#"{"text": "  just text  "}"#);
    let base_url = spawn_mock_api(api).await;
    let dir = tempfile::TempDir::new().unwrap();
    let audio = build_wav(dir.path(), "clip.wav", 16_000, 1, &[0; 160]);
    let engine = OpenAiWhisperEngine::new("sk-test".to_string(), Some(base_url), None);

    let result = engine.transcribe(&audio).await.unwrap();

    assert_eq!(result.full_text, "just text");
    assert!(result.spans.is_empty());
}

#[tokio::test]
async fn given_unauthorized_response_when_transcribing_then_returns_api_error() {
    let api = mock_api(StatusCode::UNAUTHORIZED, r#"{"error": "invalid key"}"#);
    let base_url = spawn_mock_api(api).await;
    let dir = tempfile::TempDir::new().unwrap();
    let audio = build_wav(dir.path(), "clip.wav", 16_000, 1, &[0; 160]);
    let engine = OpenAiWhisperEngine::new("sk-invalid".to_string(), Some(base_url), None);

    let result = engine.transcribe(&audio).await;

    match result {
        Err(TranscriptionError::ApiRequestFailed(message)) => {
            assert!(message.contains("401"));
            assert!(message.contains("invalid key"));
        }
        other => panic!("expected ApiRequestFailed, got {:?}", other.map(|r| r.full_text)),
    }
}

#[tokio::test]
async fn given_missing_audio_file_when_transcribing_then_returns_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = OpenAiWhisperEngine::new(
        "sk-test".to_string(),
        Some("http://127.0.0.1:9/v1".to_string()),
        None,
    );

    let result = engine.transcribe(&dir.path().join("gone.wav")).await;

    assert!(matches!(result, Err(TranscriptionError::Io(_))));
}
