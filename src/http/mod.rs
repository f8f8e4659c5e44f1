//! HTTP API for the recipe page UI
//!
//! This module provides the JSON surface the page widgets call:
//! - POST /recipes/generate - Resolve input and generate a recipe
//! - POST /recipes/transcribe - Transcribe audio without generating
//! - GET  /recipes - List saved recipes
//! - POST /recipes - Save a recipe
//! - GET  /preferences - Fixed dietary preference options
//! - GET  /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{
    ErrorResponse, GenerateRecipeRequest, GenerateRecipeResponse, SaveRecipeRequest,
    SaveRecipeResponse, TranscribeRequest, TranscribeResponse,
};
pub use routes::create_router;
pub use state::AppState;
