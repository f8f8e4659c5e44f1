//! Speech-to-text boundary: audio bytes in, transcript text out.
//!
//! The engine is a black box behind the [`Transcriber`] trait. The shipped
//! implementation talks to an OpenAI-compatible Whisper endpoint; tests
//! substitute their own impls.

mod whisper;

pub use whisper::WhisperApiTranscriber;

use async_trait::async_trait;

use crate::error::TranscribeError;

/// An audio file ready for transcription.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

impl AudioPayload {
    pub fn new(
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Maps an audio byte stream to a plain-text transcript.
///
/// One blocking call, no retries, no partial results.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: AudioPayload) -> Result<String, TranscribeError>;
}
