//! Typed errors for the store, the external-engine adapters, and startup
//! configuration.
//!
//! Each adapter returns its own error kind so callers can pattern-match on
//! the outcome instead of unwinding: transcription failures are absorbed by
//! the input resolver, generation failures become a visible API error, and
//! store corruption is reported loudly rather than treated as an empty list.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the persisted recipe store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but does not deserialize into a list of
    /// recipe strings. Deliberately not degraded to an empty collection.
    #[error("recipe store at {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access recipe store at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize recipe store: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors from the speech-to-text boundary.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// The submitted bytes are not a readable audio container.
    #[error("audio is not readable: {0}")]
    UnreadableAudio(String),

    #[error("transcription request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("transcription service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed transcription response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Errors from the text-generation boundary.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("generation service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP 429 from the model API, surfaced separately so the caller can
    /// show a retry-later message instead of a generic failure.
    #[error("generation quota exceeded: {0}")]
    RateLimited(String),

    #[error("malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("generation response contained no content")]
    EmptyResponse,
}

/// Fatal startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential is absent from the process environment.
    /// Checked at startup so the first generation call cannot fail obscurely.
    #[error("required environment variable {0} is not set")]
    MissingCredential(&'static str),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
