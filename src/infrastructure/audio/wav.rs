use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec};

use crate::application::ports::TranscriptionError;

pub const TARGET_SAMPLE_RATE: u32 = 16_000;

pub type WavFileReader = WavReader<BufReader<File>>;

pub fn open_wav(path: &Path) -> Result<WavFileReader, TranscriptionError> {
    WavReader::open(path).map_err(decode_error)
}

pub fn decode_error(error: hound::Error) -> TranscriptionError {
    match error {
        hound::Error::IoError(e) => TranscriptionError::Io(e),
        other => TranscriptionError::DecodingFailed(format!("wav: {}", other)),
    }
}

/// The local recognizer only accepts 16 kHz mono 16-bit integer PCM.
pub fn require_recognizer_format(spec: WavSpec) -> Result<(), TranscriptionError> {
    if spec.sample_rate != TARGET_SAMPLE_RATE
        || spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != SampleFormat::Int
    {
        return Err(TranscriptionError::UnsupportedFormat(format!(
            "expected {} Hz mono 16-bit PCM, got {} Hz, {} channel(s), {}-bit {:?}",
            TARGET_SAMPLE_RATE,
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample,
            spec.sample_format
        )));
    }
    Ok(())
}

/// Reads a whole 16 kHz WAV file as mono f32 samples in `[-1, 1]`,
/// down-mixing multi-channel audio.
pub fn read_mono_f32(path: &Path) -> Result<Vec<f32>, TranscriptionError> {
    let mut reader = open_wav(path)?;
    let spec = reader.spec();

    if spec.sample_rate != TARGET_SAMPLE_RATE {
        return Err(TranscriptionError::UnsupportedFormat(format!(
            "expected {} Hz audio, got {} Hz",
            TARGET_SAMPLE_RATE, spec.sample_rate
        )));
    }

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(decode_error)?,
        (SampleFormat::Int, bits @ 1..=32) => {
            let scale = (1_i64 << (bits - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(decode_error)?
        }
        (format, bits) => {
            return Err(TranscriptionError::UnsupportedFormat(format!(
                "{}-bit {:?} samples",
                bits, format
            )));
        }
    };

    let channels = spec.channels.max(1) as usize;
    if channels == 1 {
        return Ok(interleaved);
    }

    Ok(interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect())
}
