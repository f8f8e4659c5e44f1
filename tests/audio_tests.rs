// Integration tests for audio container plumbing
//
// These tests verify PCM-to-WAV wrapping for live recordings and
// container probing for uploaded files.

use std::io::Cursor;

use anyhow::Result;
use voice_recipes::audio::{probe, wrap_pcm_as_wav, AudioKind};
use voice_recipes::TranscribeError;

#[test]
fn test_wrapped_pcm_probes_as_wav() -> Result<()> {
    // 200ms of silence at 16kHz mono, as raw little-endian PCM
    let pcm = vec![0u8; 6400];

    let wav = wrap_pcm_as_wav(&pcm, 16000, 1)?;

    assert_eq!(probe(&wav)?, AudioKind::Wav);

    Ok(())
}

#[test]
fn test_wrapped_pcm_preserves_samples() -> Result<()> {
    let samples: Vec<i16> = (0..1600).map(|i| (i % 256) as i16).collect();
    let pcm: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

    let wav = wrap_pcm_as_wav(&pcm, 16000, 1)?;

    let reader = hound::WavReader::new(Cursor::new(wav))?;
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 16000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);

    let decoded: Vec<i16> = reader.into_samples::<i16>().collect::<Result<_, _>>()?;
    assert_eq!(decoded, samples);

    Ok(())
}

#[test]
fn test_empty_recording_is_unreadable() {
    let result = wrap_pcm_as_wav(&[], 16000, 1);
    assert!(matches!(result, Err(TranscribeError::UnreadableAudio(_))));
}

#[test]
fn test_odd_byte_length_recording_is_unreadable() {
    let result = wrap_pcm_as_wav(&[0u8; 3201], 16000, 1);
    assert!(matches!(result, Err(TranscribeError::UnreadableAudio(_))));
}

#[test]
fn test_probe_rejects_garbage() {
    let result = probe(b"definitely not an audio container");
    assert!(matches!(result, Err(TranscribeError::UnreadableAudio(_))));
}

#[test]
fn test_probe_rejects_truncated_wav_header() {
    // RIFF/WAVE magic with nothing behind it
    let mut bytes = b"RIFF\x00\x00\x00\x00WAVE".to_vec();
    bytes.extend_from_slice(&[0u8; 4]);

    let result = probe(&bytes);
    assert!(matches!(result, Err(TranscribeError::UnreadableAudio(_))));
}

#[test]
fn test_probe_rejects_id3_tag_without_audio() {
    // Looks like an MP3 by magic bytes, but holds no valid frames
    let mut bytes = b"ID3".to_vec();
    bytes.extend_from_slice(&[0u8; 64]);

    let result = probe(&bytes);
    assert!(matches!(result, Err(TranscribeError::UnreadableAudio(_))));
}
