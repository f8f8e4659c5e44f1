pub mod audio;
pub mod config;
pub mod error;
pub mod generate;
pub mod http;
pub mod resolve;
pub mod store;
pub mod transcribe;

pub use config::{Config, Credentials};
pub use error::{ConfigError, GenerateError, StoreError, TranscribeError};
pub use generate::{DietaryPreference, GeminiClient, RecipeGenerator, TextModel};
pub use http::{create_router, AppState};
pub use resolve::{IngredientSource, InputResolver, RawInput, ResolvedInput};
pub use store::RecipeStore;
pub use transcribe::{AudioPayload, Transcriber, WhisperApiTranscriber};
