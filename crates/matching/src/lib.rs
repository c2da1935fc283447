pub mod error;
pub mod matcher;
pub mod recipe;
pub mod settings;
pub mod source;

pub use error::RecipeSourceError;
pub use matcher::{MissingIngredient, RecipeMatch, RecipeMatcher};
pub use recipe::{CandidateRecipe, RecipeQuery};
pub use settings::{MatchSettings, PercentRounding};
pub use source::{InMemoryRecipeSource, JsonFileRecipeSource, RecipeSource};
