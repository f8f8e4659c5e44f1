//! Append-only persisted list of generated recipe texts.
//!
//! The on-disk format is a single JSON array of strings, loaded fully on
//! every read and rewritten fully on every append. The store assumes a
//! single writer: two processes appending at the same time can lose one of
//! the updates. Callers needing concurrent writers should front this with
//! an exclusive-mode append log instead.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::StoreError;

pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved recipe collection in save order.
    ///
    /// An absent file is an empty collection. A file that exists but does
    /// not parse as a JSON array of strings is reported as
    /// [`StoreError::Corrupt`], never silently discarded.
    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str::<Vec<String>>(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Append one recipe: read the full collection, push, rewrite the file.
    /// The first append creates the file (and its parent directory).
    pub fn append(&self, recipe: &str) -> Result<(), StoreError> {
        let mut recipes = self.load()?;
        recipes.push(recipe.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let serialized = serde_json::to_string(&recipes).map_err(StoreError::Serialize)?;

        fs::write(&self.path, serialized).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Saved recipe to {} ({} total)",
            self.path.display(),
            recipes.len()
        );

        Ok(())
    }
}
