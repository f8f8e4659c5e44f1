use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::TextModel;
use crate::error::GenerateError;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Text-completion client for Google's Generative Language API.
///
/// One prompt in, one completion out, via `models/{model}:generateContent`.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{API_BASE_URL}/models/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }

    /// Map a non-success status to an error kind, pulling the message out
    /// of the JSON error body when it parses.
    fn map_api_error(status: u16, body: &str) -> GenerateError {
        let message = serde_json::from_str::<GeminiResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body.to_string(), |e| e.message);

        if status == 429 {
            GenerateError::RateLimited(message)
        } else {
            GenerateError::Api { status, message }
        }
    }

    fn extract_text(response: GeminiResponse) -> Result<String, GenerateError> {
        if let Some(error) = response.error {
            return Err(GenerateError::Api {
                status: 200,
                message: error.message,
            });
        }

        response
            .candidates
            .and_then(|mut c| {
                if c.is_empty() {
                    None
                } else {
                    c.swap_remove(0).content
                }
            })
            .and_then(|mut content| {
                if content.parts.is_empty() {
                    None
                } else {
                    Some(content.parts.swap_remove(0).text)
                }
            })
            .ok_or(GenerateError::EmptyResponse)
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model = %self.model, "Sending request to Gemini API");

        let response = self
            .client
            .post(self.build_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &body));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            GenerateError::MalformedResponse(e.to_string())
        })?;

        Self::extract_text(parsed)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
