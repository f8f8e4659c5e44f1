use super::state::AppState;
use crate::error::{GenerateError, StoreError};
use crate::generate::DietaryPreference;
use crate::resolve::{RawInput, ResolvedInput};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateRecipeRequest {
    /// Ingredients typed into the text box.
    pub ingredients_text: Option<String>,

    /// Base64-encoded bytes of an uploaded WAV/MP3 file.
    pub uploaded_audio_b64: Option<String>,

    /// Base64-encoded raw 16-bit PCM from the voice-record control.
    pub recorded_pcm_b64: Option<String>,

    /// Dietary preference (default: "None").
    pub dietary_preference: Option<DietaryPreference>,
}

#[derive(Debug, Serialize)]
pub struct GenerateRecipeResponse {
    /// The generated recipe, or null when no input was provided.
    pub recipe: Option<String>,
    pub resolved_ingredients: String,
    pub transcript: Option<String>,
    pub warning: Option<String>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    pub uploaded_audio_b64: Option<String>,
    pub recorded_pcm_b64: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveRecipeRequest {
    pub recipe: String,
}

#[derive(Debug, Serialize)]
pub struct SaveRecipeResponse {
    pub status: String,
    pub saved_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /recipes/generate
/// Resolve ingredient input, then generate a recipe if any was provided
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(req): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    let input = match decode_input(req.ingredients_text, req.uploaded_audio_b64, req.recorded_pcm_b64)
    {
        Ok(input) => input,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    let preference = req.dietary_preference.unwrap_or_default();
    let resolved = state.resolver.resolve(&input).await;

    // Terminal no-input case: nothing to generate, not an error.
    if resolved.is_empty() {
        return (
            StatusCode::OK,
            Json(GenerateRecipeResponse {
                recipe: None,
                resolved_ingredients: String::new(),
                transcript: None,
                warning: resolved.warning,
                generated_at: chrono::Utc::now(),
            }),
        )
            .into_response();
    }

    match state
        .generator
        .generate(&resolved.ingredients, preference)
        .await
    {
        Ok(recipe) => {
            info!("Recipe generated ({} chars)", recipe.len());
            (
                StatusCode::OK,
                Json(GenerateRecipeResponse {
                    recipe: Some(recipe),
                    resolved_ingredients: resolved.ingredients,
                    transcript: resolved.transcript,
                    warning: resolved.warning,
                    generated_at: chrono::Utc::now(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to generate recipe: {}", e);
            let status = match e {
                GenerateError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(ErrorResponse {
                    error: format!("Error generating recipe: {e}"),
                }),
            )
                .into_response()
        }
    }
}

/// POST /recipes/transcribe
/// Transcribe audio and return the transcript without generating
pub async fn transcribe_audio(
    State(state): State<AppState>,
    Json(req): Json<TranscribeRequest>,
) -> impl IntoResponse {
    let input = match decode_input(None, req.uploaded_audio_b64, req.recorded_pcm_b64) {
        Ok(input) => input,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    if input.uploaded_audio.is_none() && input.recorded_audio.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No audio provided".to_string(),
            }),
        )
            .into_response();
    }

    let resolved: ResolvedInput = state.resolver.resolve(&input).await;

    match resolved.transcript {
        Some(transcript) => (StatusCode::OK, Json(TranscribeResponse { transcript })).into_response(),
        None => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: resolved
                    .warning
                    .unwrap_or_else(|| "Transcription produced no text".to_string()),
            }),
        )
            .into_response(),
    }
}

/// GET /recipes
/// Return the saved recipe collection in save order
pub async fn list_recipes(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.load() {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => {
            error!("Failed to load saved recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to load saved recipes: {e}"),
                }),
            )
                .into_response()
        }
    }
}

/// POST /recipes
/// Append a recipe to the saved collection
pub async fn save_recipe(
    State(state): State<AppState>,
    Json(req): Json<SaveRecipeRequest>,
) -> impl IntoResponse {
    match state.store.append(&req.recipe) {
        Ok(()) => match state.store.load() {
            Ok(recipes) => (
                StatusCode::CREATED,
                Json(SaveRecipeResponse {
                    status: "saved".to_string(),
                    saved_count: recipes.len(),
                }),
            )
                .into_response(),
            Err(e) => store_error_response(e),
        },
        Err(e) => store_error_response(e),
    }
}

/// GET /preferences
/// The fixed dietary preference options, in selector order
pub async fn list_preferences() -> impl IntoResponse {
    let labels: Vec<&str> = DietaryPreference::ALL.iter().map(|p| p.label()).collect();
    (StatusCode::OK, Json(labels))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// ============================================================================
// Helpers
// ============================================================================

fn store_error_response(e: StoreError) -> axum::response::Response {
    error!("Recipe store error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Recipe store error: {e}"),
        }),
    )
        .into_response()
}

fn decode_input(
    typed_text: Option<String>,
    uploaded_audio_b64: Option<String>,
    recorded_pcm_b64: Option<String>,
) -> Result<RawInput, String> {
    let uploaded_audio = uploaded_audio_b64
        .map(|b64| decode_b64(&b64, "uploaded_audio_b64"))
        .transpose()?;

    let recorded_audio = recorded_pcm_b64
        .map(|b64| decode_b64(&b64, "recorded_pcm_b64"))
        .transpose()?;

    Ok(RawInput {
        typed_text,
        uploaded_audio,
        recorded_audio,
    })
}

fn decode_b64(encoded: &str, field: &str) -> Result<Vec<u8>, String> {
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| format!("Invalid base64 in {field}: {e}"))
}
