use std::io::Cursor;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::TranscribeError;

/// Audio container kinds accepted by the upload control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioKind {
    Wav,
    Mp3,
}

impl AudioKind {
    pub fn mime_type(self) -> &'static str {
        match self {
            AudioKind::Wav => "audio/wav",
            AudioKind::Mp3 => "audio/mpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            AudioKind::Wav => "wav",
            AudioKind::Mp3 => "mp3",
        }
    }
}

/// Validate uploaded audio bytes and identify the container.
///
/// Sniffs the container from magic bytes, then confirms symphonia can open
/// a format reader over it. Rejecting garbage here keeps an unreadable
/// upload from turning into an opaque transcription-service error.
pub fn probe(bytes: &[u8]) -> Result<AudioKind, TranscribeError> {
    let kind = sniff_kind(bytes).ok_or_else(|| {
        TranscribeError::UnreadableAudio("not a recognized WAV or MP3 container".to_string())
    })?;

    let source = Box::new(Cursor::new(bytes.to_vec()));
    let stream = MediaSourceStream::new(source, Default::default());

    let mut hint = Hint::new();
    hint.with_extension(kind.extension());

    symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| TranscribeError::UnreadableAudio(e.to_string()))?;

    Ok(kind)
}

fn sniff_kind(bytes: &[u8]) -> Option<AudioKind> {
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE" {
        return Some(AudioKind::Wav);
    }

    // ID3-tagged MP3, or a bare MPEG frame sync (0xFFE...)
    if bytes.len() >= 3 && &bytes[0..3] == b"ID3" {
        return Some(AudioKind::Mp3);
    }
    if bytes.len() >= 2 && bytes[0] == 0xFF && (bytes[1] & 0xE0) == 0xE0 {
        return Some(AudioKind::Mp3);
    }

    None
}
