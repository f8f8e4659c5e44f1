//! Merges the three ingredient sources into one canonical string.
//!
//! Precedence is fixed: non-empty typed text wins verbatim and skips
//! transcription entirely; otherwise uploaded audio, otherwise the live
//! recording; otherwise the canonical string is empty and generation is
//! skipped. A transcription failure is absorbed into a user-visible
//! warning rather than aborting the interaction.

use std::sync::Arc;

use tracing::{info, warn};

use crate::audio;
use crate::config::RecordingConfig;
use crate::error::TranscribeError;
use crate::transcribe::{AudioPayload, Transcriber};

/// Raw input collected by the presentation layer. All sources optional.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    /// Ingredients typed into the text box.
    pub typed_text: Option<String>,
    /// Bytes of an uploaded audio file (WAV or MP3 container).
    pub uploaded_audio: Option<Vec<u8>>,
    /// Raw 16-bit PCM from the live voice-record control.
    pub recorded_audio: Option<Vec<u8>>,
}

/// Where the canonical ingredient string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientSource {
    Typed,
    UploadedAudio,
    RecordedAudio,
    /// No usable input; generation is skipped.
    Empty,
}

/// Outcome of input resolution. Always a success value; transcription
/// trouble shows up as `warning`, not as an error.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    /// The canonical ingredient string passed to the generator.
    pub ingredients: String,
    pub source: IngredientSource,
    /// The transcript, when audio was the source.
    pub transcript: Option<String>,
    /// User-visible warning from a failed transcription.
    pub warning: Option<String>,
}

impl ResolvedInput {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    fn empty(warning: Option<String>) -> Self {
        Self {
            ingredients: String::new(),
            source: IngredientSource::Empty,
            transcript: None,
            warning,
        }
    }
}

/// Resolves raw input against the transcription boundary.
///
/// Holds a long-lived handle to the transcriber, constructed once at
/// startup and shared across interactions.
pub struct InputResolver {
    transcriber: Arc<dyn Transcriber>,
    recording_format: RecordingConfig,
}

impl InputResolver {
    pub fn new(transcriber: Arc<dyn Transcriber>, recording_format: RecordingConfig) -> Self {
        Self {
            transcriber,
            recording_format,
        }
    }

    /// Produce the canonical ingredient string for one interaction.
    pub async fn resolve(&self, input: &RawInput) -> ResolvedInput {
        // Typed text wins verbatim; audio is never touched.
        if let Some(text) = &input.typed_text {
            if !text.trim().is_empty() {
                return ResolvedInput {
                    ingredients: text.clone(),
                    source: IngredientSource::Typed,
                    transcript: None,
                    warning: None,
                };
            }
        }

        // Uploaded audio takes priority over the live recording.
        if let Some(bytes) = &input.uploaded_audio {
            return self
                .transcribe_source(self.upload_payload(bytes), IngredientSource::UploadedAudio)
                .await;
        }

        if let Some(bytes) = &input.recorded_audio {
            return self
                .transcribe_source(self.recording_payload(bytes), IngredientSource::RecordedAudio)
                .await;
        }

        info!("No ingredient input provided; skipping generation");
        ResolvedInput::empty(None)
    }

    async fn transcribe_source(
        &self,
        payload: Result<AudioPayload, TranscribeError>,
        source: IngredientSource,
    ) -> ResolvedInput {
        let result = match payload {
            Ok(payload) => self.transcriber.transcribe(payload).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(transcript) => {
                info!("Transcribed ingredients ({} chars)", transcript.len());
                ResolvedInput {
                    ingredients: transcript.clone(),
                    source,
                    transcript: Some(transcript),
                    warning: None,
                }
            }
            Err(e) => {
                warn!("Transcription failed: {}", e);
                ResolvedInput::empty(Some(format!("Error transcribing audio: {e}")))
            }
        }
    }

    fn upload_payload(&self, bytes: &[u8]) -> Result<AudioPayload, TranscribeError> {
        let kind = audio::probe(bytes)?;
        Ok(AudioPayload::new(
            bytes.to_vec(),
            format!("upload.{}", kind.extension()),
            kind.mime_type(),
        ))
    }

    fn recording_payload(&self, pcm_bytes: &[u8]) -> Result<AudioPayload, TranscribeError> {
        let wav = audio::wrap_pcm_as_wav(
            pcm_bytes,
            self.recording_format.sample_rate,
            self.recording_format.channels,
        )?;
        Ok(AudioPayload::new(wav, "recording.wav", "audio/wav"))
    }
}
