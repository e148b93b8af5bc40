// ABOUTME: Recipe catalog collaborator supplying the full recipe set to the pipeline
// ABOUTME: Defines the RecipeCatalog trait and a read-only in-memory catalog loaded from JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe catalog access.
//!
//! The pipeline never mutates recipes; it borrows them from the shared
//! snapshot returned by [`RecipeCatalog::all_recipes`].

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use mealplan_core::errors::{AppError, AppResult, ErrorCode};
use mealplan_core::models::RecipeRecord;
use tokio::fs;
use tracing::info;

/// Failures while loading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("Failed to read recipe catalog {}: {source}", .path.display())]
    Read {
        /// Catalog path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The file is not a JSON array of recipes
    #[error("Invalid recipe catalog {}: {source}", .path.display())]
    Parse {
        /// Catalog path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::Read { .. } => ErrorCode::ResourceUnavailable,
            CatalogError::Parse { .. } => ErrorCode::SerializationError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Source of the recipes a plan can draw from
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Snapshot of every recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn all_recipes(&self) -> AppResult<Arc<[RecipeRecord]>>;
}

/// Immutable catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    recipes: Arc<[RecipeRecord]>,
}

impl InMemoryCatalog {
    /// Catalog over the given recipes
    #[must_use]
    pub fn new(recipes: Vec<RecipeRecord>) -> Self {
        Self {
            recipes: recipes.into(),
        }
    }

    /// Load a JSON array of recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let recipes: Vec<RecipeRecord> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), recipes = recipes.len(), "Recipe catalog loaded");
        Ok(Self::new(recipes))
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[async_trait]
impl RecipeCatalog for InMemoryCatalog {
    async fn all_recipes(&self) -> AppResult<Arc<[RecipeRecord]>> {
        Ok(Arc::clone(&self.recipes))
    }
}
