use std::sync::Arc;

use crate::generate::RecipeGenerator;
use crate::resolve::InputResolver;
use crate::store::RecipeStore;

/// Shared application state for HTTP handlers.
///
/// The resolver, generator, and store are long-lived handles built once
/// during startup and shared across every interaction.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<InputResolver>,
    pub generator: Arc<RecipeGenerator>,
    pub store: Arc<RecipeStore>,
}

impl AppState {
    pub fn new(
        resolver: Arc<InputResolver>,
        generator: Arc<RecipeGenerator>,
        store: Arc<RecipeStore>,
    ) -> Self {
        Self {
            resolver,
            generator,
            store,
        }
    }
}
