use transcript_service::application::ports::TranscriptionError;
use transcript_service::infrastructure::audio::wav::{open_wav, read_mono_f32, require_recognizer_format};

use crate::helpers::build_wav;

#[test]
fn given_stereo_16khz_wav_when_reading_mono_then_averages_channels() {
    let dir = tempfile::TempDir::new().unwrap();
    let audio = build_wav(dir.path(), "stereo.wav", 16_000, 2, &[16_384, 0, -16_384, 0]);

    let samples = read_mono_f32(&audio).unwrap();

    assert_eq!(samples.len(), 2);
    assert!((samples[0] - 0.25).abs() < 1e-4);
    assert!((samples[1] + 0.25).abs() < 1e-4);
}

#[test]
fn given_44khz_wav_when_reading_mono_then_rejects_sample_rate() {
    let dir = tempfile::TempDir::new().unwrap();
    let audio = build_wav(dir.path(), "cd.wav", 44_100, 1, &[0; 10]);

    let result = read_mono_f32(&audio);

    assert!(matches!(result, Err(TranscriptionError::UnsupportedFormat(_))));
}

#[test]
fn given_16khz_mono_pcm_when_checking_recognizer_format_then_accepts() {
    let dir = tempfile::TempDir::new().unwrap();
    let audio = build_wav(dir.path(), "ok.wav", 16_000, 1, &[0; 10]);
    let reader = open_wav(&audio).unwrap();

    assert!(require_recognizer_format(reader.spec()).is_ok());
}

#[test]
fn given_missing_file_when_opening_then_returns_io_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let result = open_wav(&dir.path().join("absent.wav"));

    assert!(matches!(result, Err(TranscriptionError::Io(_))));
}
