use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::RecipeSourceError;
use crate::recipe::{CandidateRecipe, RecipeQuery};

/// Provider of candidate recipes (third-party recipe API, local file, ...)
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &RecipeQuery) -> Result<Vec<CandidateRecipe>, RecipeSourceError>;
}

/// Recipes held in memory, filtered per query
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeSource {
    recipes: Vec<CandidateRecipe>,
}

impl InMemoryRecipeSource {
    pub fn new(recipes: Vec<CandidateRecipe>) -> Self {
        Self { recipes }
    }
}

#[async_trait]
impl RecipeSource for InMemoryRecipeSource {
    async fn search(&self, query: &RecipeQuery) -> Result<Vec<CandidateRecipe>, RecipeSourceError> {
        Ok(query.apply(&self.recipes))
    }
}

/// Recipes read from a JSON array on disk at every search
#[derive(Debug, Clone)]
pub struct JsonFileRecipeSource {
    path: PathBuf,
}

impl JsonFileRecipeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Vec<CandidateRecipe>, RecipeSourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RecipeSourceError::Validation(format!(
                    "Recipe file not found: {}",
                    self.path.display()
                )),
                _ => RecipeSourceError::Generic(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )),
            })?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl RecipeSource for JsonFileRecipeSource {
    async fn search(&self, query: &RecipeQuery) -> Result<Vec<CandidateRecipe>, RecipeSourceError> {
        let recipes = self.load().await?;
        tracing::debug!(
            path = %self.path.display(),
            loaded = recipes.len(),
            "recipe file loaded"
        );

        Ok(query.apply(&recipes))
    }
}
