use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Generation pipeline
        .route("/recipes/generate", post(handlers::generate_recipe))
        .route("/recipes/transcribe", post(handlers::transcribe_audio))
        // Saved recipe collection
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::save_recipe),
        )
        // Selector options
        .route("/preferences", get(handlers::list_preferences))
        // Middleware: request logging and permissive CORS for the page UI
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
