use pantry_shared::{Inventory, fuzzy_contains, normalize};
use pantry_substitution::{Substitution, SubstitutionCatalog, WasteProneClassifier};
use serde::Serialize;
use time::Date;

use crate::error::RecipeSourceError;
use crate::recipe::{CandidateRecipe, RecipeQuery};
use crate::settings::MatchSettings;
use crate::source::RecipeSource;

/// Required ingredient not found in the inventory
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MissingIngredient {
    pub name: String,
    /// `None` when no substitute is known for this ingredient
    pub substitution: Option<Substitution>,
}

/// A candidate recipe scored against the inventory
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecipeMatch {
    pub recipe_id: String,
    pub title: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<MissingIngredient>,
    pub match_percentage: u8,
    /// Inventory items used by the recipe that spoil quickly
    pub waste_prone_used: Vec<String>,
    /// Inventory items used by the recipe that expire soon
    pub expiring_used: Vec<String>,
    pub score: f32,
}

impl RecipeMatch {
    pub fn can_cook_now(&self) -> bool {
        self.missing_ingredients.is_empty()
    }

    /// Every missing ingredient has a substitute already on hand
    pub fn can_cook_with_substitutes(&self) -> bool {
        self.missing_ingredients.iter().all(|missing| {
            missing
                .substitution
                .as_ref()
                .is_some_and(|substitution| substitution.available)
        })
    }
}

/// Recipe Matching Service
///
/// Scores recipes by how much of their ingredient list is already on hand and biases
/// the ranking towards recipes that use up perishable or soon-expiring items.
///
/// Score = match percentage
///       + waste_prone_weight * waste-prone items used
///       + expiring_soon_weight * expiring items used
///
/// Weights are non-negative (see [`MatchSettings::validate`]), so using up a
/// perishable never lowers a recipe's rank.
#[derive(Debug, Clone, Default)]
pub struct RecipeMatcher {
    settings: MatchSettings,
}

impl RecipeMatcher {
    pub fn new(settings: MatchSettings) -> Self {
        Self { settings }
    }

    /// Match a single recipe against the inventory
    ///
    /// A required ingredient is on hand when its normalized name and an inventory
    /// item's normalized name contain one another. The first such item is the one
    /// considered used.
    pub fn match_recipe(
        &self,
        recipe: &CandidateRecipe,
        inventory: &Inventory,
        today: Date,
    ) -> RecipeMatch {
        let inventory_names: Vec<String> = inventory
            .items()
            .iter()
            .map(|item| normalize(&item.name))
            .collect();
        let available = inventory.names();
        let mut used = vec![false; inventory_names.len()];
        let mut matched_ingredients = Vec::new();
        let mut missing_ingredients = Vec::new();

        for ingredient in &recipe.required_ingredients {
            let required = normalize(&ingredient.name);
            // Blank names would match every item
            let on_hand = inventory_names.iter().position(|name| {
                !name.is_empty() && !required.is_empty() && fuzzy_contains(name, &required)
            });

            match on_hand {
                Some(index) => {
                    used[index] = true;
                    matched_ingredients.push(ingredient.name.clone());
                }
                None => {
                    let substitution = if self.settings.suggest_substitutes {
                        SubstitutionCatalog::find_available_substitute(&ingredient.name, &available)
                    } else {
                        None
                    };

                    missing_ingredients.push(MissingIngredient {
                        name: ingredient.name.clone(),
                        substitution,
                    });
                }
            }
        }

        let used_items: Vec<_> = inventory
            .items()
            .iter()
            .zip(&used)
            .filter_map(|(item, used)| used.then_some(item))
            .collect();

        let waste_prone_used: Vec<String> = used_items
            .iter()
            .filter(|item| WasteProneClassifier::is_waste_prone(&item.name))
            .map(|item| item.name.clone())
            .collect();

        let expiring_used: Vec<String> = used_items
            .iter()
            .filter(|item| item.expires_within(today, self.settings.expiring_within_days))
            .map(|item| item.name.clone())
            .collect();

        let match_percentage = self
            .settings
            .rounding
            .percentage(matched_ingredients.len(), recipe.required_ingredients.len());

        let score = f32::from(match_percentage)
            + self.settings.waste_prone_weight * waste_prone_used.len() as f32
            + self.settings.expiring_soon_weight * expiring_used.len() as f32;

        RecipeMatch {
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            matched_ingredients,
            missing_ingredients,
            match_percentage,
            waste_prone_used,
            expiring_used,
            score,
        }
    }

    /// Match all recipes and order them best first
    ///
    /// Recipes under `min_match_percentage` are dropped. Equal scores keep the order
    /// the recipes were given in.
    pub fn rank(
        &self,
        recipes: &[CandidateRecipe],
        inventory: &Inventory,
        today: Date,
    ) -> Vec<RecipeMatch> {
        let mut matches: Vec<RecipeMatch> = recipes
            .iter()
            .map(|recipe| self.match_recipe(recipe, inventory, today))
            .filter(|m| m.match_percentage >= self.settings.min_match_percentage)
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            candidates = recipes.len(),
            ranked = matches.len(),
            "recipes ranked"
        );

        matches
    }

    /// Fetch candidates from a recipe source and rank them against the inventory
    #[tracing::instrument(skip(self, source, inventory), fields(inventory = inventory.len()))]
    pub async fn recommend<S>(
        &self,
        source: &S,
        query: &RecipeQuery,
        inventory: &Inventory,
        today: Date,
    ) -> Result<Vec<RecipeMatch>, RecipeSourceError>
    where
        S: RecipeSource + ?Sized,
    {
        let recipes = source.search(query).await.inspect_err(|e| {
            tracing::warn!(error = %e, retryable = e.is_retryable(), "recipe search failed");
        })?;

        Ok(self.rank(&recipes, inventory, today))
    }
}
