use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use super::{AudioPayload, Transcriber};
use crate::error::TranscribeError;

/// Response shape shared by OpenAI-compatible transcription APIs.
#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Transcriber backed by an OpenAI-compatible Whisper endpoint
/// (OpenAI, Groq, or a self-hosted whisper server).
///
/// Request format: multipart form upload with `model` and `file` fields,
/// optional `Bearer` token, JSON response with a `text` field.
pub struct WhisperApiTranscriber {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl WhisperApiTranscriber {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
        }
    }
}

#[async_trait]
impl Transcriber for WhisperApiTranscriber {
    async fn transcribe(&self, audio: AudioPayload) -> Result<String, TranscribeError> {
        debug!(
            "Uploading {} bytes to {} (model {})",
            audio.bytes.len(),
            self.endpoint,
            self.model
        );

        let part = reqwest::multipart::Part::bytes(audio.bytes)
            .file_name(audio.file_name)
            .mime_str(&audio.mime_type)
            .map_err(|e| TranscribeError::UnreadableAudio(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", part);

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Transcription API error");
            return Err(TranscribeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: TranscriptionResponse =
            serde_json::from_str(&body).map_err(TranscribeError::MalformedResponse)?;

        debug!("Received transcript ({} chars)", parsed.text.len());

        Ok(parsed.text)
    }
}
