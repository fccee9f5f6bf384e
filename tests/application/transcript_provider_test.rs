use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::{self, StreamExt};

use transcript_service::application::services::TranscriptProvider;
use transcript_service::domain::{EngineKind, FailureKind};

use crate::helpers::{
    EngineBehavior, FakeEngineFactory, RecordingScratchStore, build_wav, count_files,
};

fn body(data: &'static [u8]) -> futures::stream::BoxStream<'static, Result<Bytes, io::Error>> {
    stream::once(async move { Ok(Bytes::from_static(data)) }).boxed()
}

#[tokio::test]
async fn given_valid_wav_path_when_transcribing_with_vosk_then_returns_word_spans() {
    let dir = tempfile::TempDir::new().unwrap();
    let audio = build_wav(dir.path(), "hello.wav", 16_000, 1, &[0; 3200]);
    let engines = Arc::new(FakeEngineFactory::succeeding());
    let scratch = Arc::new(RecordingScratchStore::new(dir.path()));
    let provider = TranscriptProvider::new(engines.clone(), scratch.clone());

    let envelope = provider
        .transcribe_from_path(audio.to_str().unwrap(), "vosk")
        .await;

    assert!(envelope.is_valid());
    let data = envelope.data().unwrap();
    assert_eq!(data.full_text, "hello world");
    assert_eq!(data.words.len(), 2);
    assert_eq!(data.engine, "vosk");
    assert_eq!(data.file_name, "hello.wav");
    assert_eq!(engines.calls()[0].path, audio);
    assert_eq!(scratch.materialized(), 0);
}

#[tokio::test]
async fn given_unknown_engine_when_transcribing_then_fails_without_constructing_engine() {
    let dir = tempfile::TempDir::new().unwrap();
    let engines = Arc::new(FakeEngineFactory::succeeding());
    let scratch = Arc::new(RecordingScratchStore::new(dir.path()));
    let provider = TranscriptProvider::new(engines.clone(), scratch.clone());

    let envelope = provider
        .transcribe_from_stream(body(b"RIFF"), "a.wav", "deepspeech")
        .await;

    assert_eq!(envelope.failure_kind(), Some(FailureKind::UnknownEngine));
    assert_eq!(envelope.errors(), ["Unknown engine: deepspeech"]);
    assert_eq!(engines.created(), 0);
    assert_eq!(scratch.materialized(), 0);
}

#[tokio::test]
async fn given_successful_upload_when_transcribing_then_scratch_file_is_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let engines = Arc::new(FakeEngineFactory::succeeding());
    let scratch = Arc::new(RecordingScratchStore::new(dir.path()));
    let provider = TranscriptProvider::new(engines.clone(), scratch.clone());

    let envelope = provider
        .transcribe_from_stream(body(b"RIFF....WAVE"), "upload.wav", "Whisper")
        .await;

    assert!(envelope.is_valid());
    assert_eq!(envelope.data().unwrap().engine, "whisper");
    let calls = engines.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].kind, EngineKind::Whisper);
    assert!(calls[0].file_existed);
    assert!(calls[0].path.starts_with(dir.path()));
    assert!(!calls[0].path.exists());
    assert_eq!(scratch.released(), 1);
    assert_eq!(count_files(dir.path()), 0);
}

#[tokio::test]
async fn given_engine_failure_when_transcribing_upload_then_cleans_up_and_reports() {
    let dir = tempfile::TempDir::new().unwrap();
    let engines = Arc::new(FakeEngineFactory::new(EngineBehavior::Fail(
        "decoder crashed".to_string(),
    )));
    let scratch = Arc::new(RecordingScratchStore::new(dir.path()));
    let provider = TranscriptProvider::new(engines.clone(), scratch.clone());

    let envelope = provider
        .transcribe_from_stream(body(b"RIFF"), "upload.wav", "vosk")
        .await;

    assert!(!envelope.is_valid());
    assert!(envelope.data().is_none());
    assert_eq!(
        envelope.failure_kind(),
        Some(FailureKind::EngineExecutionFailed)
    );
    assert!(envelope.errors()[0].starts_with("Transcription failed: "));
    assert!(envelope.errors()[0].contains("decoder crashed"));
    assert_eq!(scratch.released(), 1);
    assert_eq!(count_files(dir.path()), 0);
}

#[tokio::test]
async fn given_unavailable_engine_when_transcribing_upload_then_no_scratch_file_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let engines = Arc::new(FakeEngineFactory::new(EngineBehavior::Unavailable(
        "model missing".to_string(),
    )));
    let scratch = Arc::new(RecordingScratchStore::new(dir.path()));
    let provider = TranscriptProvider::new(engines.clone(), scratch.clone());

    let envelope = provider
        .transcribe_from_stream(body(b"RIFF"), "upload.wav", "vosk")
        .await;

    assert_eq!(envelope.failure_kind(), Some(FailureKind::EngineUnavailable));
    assert!(envelope.errors()[0].contains("model missing"));
    assert_eq!(scratch.materialized(), 0);
}

#[tokio::test]
async fn given_release_failure_when_transcription_succeeds_then_result_is_still_returned() {
    let dir = tempfile::TempDir::new().unwrap();
    let engines = Arc::new(FakeEngineFactory::succeeding());
    let scratch = Arc::new(RecordingScratchStore::failing_release(dir.path()));
    let provider = TranscriptProvider::new(engines, scratch.clone());

    let envelope = provider
        .transcribe_from_stream(body(b"RIFF"), "upload.wav", "whisper")
        .await;

    assert!(envelope.is_valid());
    assert_eq!(scratch.released(), 1);
}

#[tokio::test]
async fn given_write_failure_when_materializing_then_reports_resource_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let engines = Arc::new(FakeEngineFactory::succeeding());
    let scratch = Arc::new(RecordingScratchStore::failing_write(dir.path()));
    let provider = TranscriptProvider::new(engines.clone(), scratch.clone());

    let envelope = provider
        .transcribe_from_stream(body(b"RIFF"), "upload.wav", "whisper")
        .await;

    assert_eq!(envelope.failure_kind(), Some(FailureKind::ResourceIoFailed));
    assert!(envelope.errors()[0].contains("disk full"));
    assert!(engines.calls().is_empty());
    assert_eq!(scratch.released(), 0);
}

#[tokio::test]
async fn given_concurrent_uploads_when_transcribing_then_each_gets_its_own_scratch_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let engines = Arc::new(FakeEngineFactory::succeeding());
    let scratch = Arc::new(RecordingScratchStore::new(dir.path()));
    let provider = TranscriptProvider::new(engines.clone(), scratch.clone());

    let (first, second) = tokio::join!(
        provider.transcribe_from_stream(body(b"one"), "one.wav", "vosk"),
        provider.transcribe_from_stream(body(b"two"), "two.wav", "whisper"),
    );

    assert!(first.is_valid());
    assert!(second.is_valid());
    let calls = engines.calls();
    assert_eq!(calls.len(), 2);
    assert_ne!(calls[0].path, calls[1].path);
    assert_eq!(count_files(dir.path()), 0);
}
