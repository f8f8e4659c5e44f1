//! Recipe generation: fixed prompt template in, opaque recipe text out.
//!
//! The language model is a black box behind the [`TextModel`] trait; the
//! shipped implementation is the Gemini client in [`gemini`]. The model's
//! raw completion is the recipe, stored and displayed as-is with no
//! validation of section presence or format.

mod gemini;

pub use gemini::GeminiClient;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GenerateError;

/// The fixed set of dietary preferences offered by the selector.
/// Used only as generation input, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[default]
    None,
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Low-Carb")]
    LowCarb,
    Keto,
}

impl DietaryPreference {
    /// All options, in the order the selector shows them.
    pub const ALL: [DietaryPreference; 6] = [
        DietaryPreference::None,
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::GlutenFree,
        DietaryPreference::LowCarb,
        DietaryPreference::Keto,
    ];

    /// The literal substituted into the prompt template.
    pub fn label(self) -> &'static str {
        match self {
            DietaryPreference::None => "None",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::LowCarb => "Low-Carb",
            DietaryPreference::Keto => "Keto",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a single plain-text prompt to a single plain-text completion.
///
/// No streaming, no function calling, no structured output.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Builds the recipe prompt and submits it to the model.
pub struct RecipeGenerator {
    model: Arc<dyn TextModel>,
}

impl RecipeGenerator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Generate a recipe for the given ingredients and preference.
    ///
    /// The completion passes through unmodified; a malformed recipe is the
    /// caller's to display and store as-is.
    pub async fn generate(
        &self,
        ingredients: &str,
        preference: DietaryPreference,
    ) -> Result<String, GenerateError> {
        let prompt = build_prompt(ingredients, preference);

        info!(
            "Generating recipe ({} ingredient chars, preference {})",
            ingredients.len(),
            preference
        );

        let recipe = self.model.complete(&prompt).await?;

        info!("Received recipe ({} chars)", recipe.len());

        Ok(recipe)
    }
}

/// The fixed five-section instruction template.
pub fn build_prompt(ingredients: &str, preference: DietaryPreference) -> String {
    format!(
        "Act as a professional chef. Generate a detailed recipe based on the following ingredients:\n\
         \n\
         Ingredients: {ingredients}\n\
         \n\
         Dietary Preference: {preference}\n\
         \n\
         Provide the recipe in the following format:\n\
         1. Recipe Name\n\
         2. Ingredients (with quantities)\n\
         3. Step-by-Step Instructions\n\
         4. Serving Suggestions\n\
         5. Tips or Variations\n"
    )
}
