use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding the Gemini API key. Required.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable holding the transcription API key. Optional;
/// self-hosted Whisper endpoints typically take no authentication.
pub const TRANSCRIPTION_API_KEY_ENV: &str = "TRANSCRIPTION_API_KEY";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub store: StoreConfig,
    pub recording: RecordingConfig,
    pub transcription: TranscriptionConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON file holding the saved recipe list.
    pub path: String,
}

/// Format of raw PCM delivered by the live voice-record control.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecordingConfig {
    pub sample_rate: u32,
    pub channels: u16,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptionConfig {
    /// OpenAI-compatible transcription endpoint
    /// (e.g. https://api.openai.com/v1/audio/transcriptions).
    pub endpoint: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerationConfig {
    /// Gemini model name (e.g. gemini-2.5-flash).
    pub model: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize::<Config>()?)
    }
}

/// Credentials resolved from the process environment at startup.
#[derive(Clone)]
pub struct Credentials {
    pub gemini_api_key: String,
    pub transcription_api_key: Option<String>,
}

impl Credentials {
    /// Read credentials, failing fast when the required Gemini key is
    /// missing rather than failing obscurely on the first generation call.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = std::env::var(GEMINI_API_KEY_ENV)
            .map_err(|_| ConfigError::MissingCredential(GEMINI_API_KEY_ENV))?;

        let transcription_api_key = std::env::var(TRANSCRIPTION_API_KEY_ENV).ok();

        Ok(Self {
            gemini_api_key,
            transcription_api_key,
        })
    }
}
