use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use voice_recipes::{
    create_router, AppState, Config, Credentials, GeminiClient, InputResolver, RecipeGenerator,
    RecipeStore, WhisperApiTranscriber,
};

#[derive(Parser)]
#[command(name = "voice-recipes", about = "Voice & text-based recipe generator")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/voice-recipes")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    // Fail fast on a missing API key instead of on the first generation call
    let credentials = Credentials::from_env()?;

    info!("{} v0.1.0", cfg.service.name);
    info!("Recipe store: {}", cfg.store.path);
    info!("Transcription endpoint: {}", cfg.transcription.endpoint);
    info!("Generation model: {}", cfg.generation.model);

    // Long-lived handles to the external engines, built once and shared
    let transcriber = Arc::new(WhisperApiTranscriber::new(
        cfg.transcription.endpoint.clone(),
        cfg.transcription.model.clone(),
        credentials.transcription_api_key.clone(),
    ));
    let model = Arc::new(GeminiClient::new(
        credentials.gemini_api_key.clone(),
        cfg.generation.model.clone(),
    ));

    let resolver = Arc::new(InputResolver::new(transcriber, cfg.recording));
    let generator = Arc::new(RecipeGenerator::new(model));
    let store = Arc::new(RecipeStore::new(&cfg.store.path));

    let state = AppState::new(resolver, generator, store);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, router)
        .await
        .context("HTTP server error")?;

    Ok(())
}
