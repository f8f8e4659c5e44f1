use std::io::Cursor;

use crate::error::TranscribeError;

/// Wrap raw 16-bit little-endian PCM bytes in a WAV container.
///
/// The live voice-record control delivers bare PCM frames; the
/// transcription endpoint wants a real audio file, so the recording is
/// framed here using the configured capture format.
pub fn wrap_pcm_as_wav(
    pcm_bytes: &[u8],
    sample_rate: u32,
    channels: u16,
) -> Result<Vec<u8>, TranscribeError> {
    if pcm_bytes.is_empty() {
        return Err(TranscribeError::UnreadableAudio(
            "recording is empty".to_string(),
        ));
    }

    if pcm_bytes.len() % 2 != 0 {
        return Err(TranscribeError::UnreadableAudio(format!(
            "recording has odd byte length {}; expected 16-bit samples",
            pcm_bytes.len()
        )));
    }

    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Vec::new();
    {
        let cursor = Cursor::new(&mut buffer);
        let mut writer = hound::WavWriter::new(cursor, spec)
            .map_err(|e| TranscribeError::UnreadableAudio(e.to_string()))?;

        for sample in pcm_bytes.chunks_exact(2) {
            let value = i16::from_le_bytes([sample[0], sample[1]]);
            writer
                .write_sample(value)
                .map_err(|e| TranscribeError::UnreadableAudio(e.to_string()))?;
        }

        writer
            .finalize()
            .map_err(|e| TranscribeError::UnreadableAudio(e.to_string()))?;
    }

    Ok(buffer)
}
