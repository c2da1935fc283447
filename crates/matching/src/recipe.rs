use pantry_shared::Ingredient;
use serde::{Deserialize, Serialize};

/// Recipe returned by a recipe source, before matching against the inventory
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CandidateRecipe {
    pub id: String,
    pub title: String,
    #[serde(alias = "requiredIngredients", alias = "ingredients")]
    pub required_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default, alias = "readyInMinutes")]
    pub ready_in_minutes: Option<u32>,
}

/// Search parameters passed to a recipe source
///
/// # Business Rules
/// - Cuisine and diet compare case-insensitively against the recipe's lists
/// - When a time limit is set, recipes without a ready time are excluded
/// - `offset` and `number` paginate the filtered results
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecipeQuery {
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub max_ready_minutes: Option<u32>,
    /// Maximum number of recipes returned, all when unset
    #[serde(default)]
    pub number: Option<usize>,
    #[serde(default)]
    pub offset: usize,
}

impl RecipeQuery {
    pub fn matches(&self, recipe: &CandidateRecipe) -> bool {
        if let Some(cuisine) = &self.cuisine
            && !contains_ignore_case(&recipe.cuisines, cuisine)
        {
            return false;
        }

        if let Some(diet) = &self.diet
            && !contains_ignore_case(&recipe.diets, diet)
        {
            return false;
        }

        match self.max_ready_minutes {
            Some(max) => recipe.ready_in_minutes.is_some_and(|minutes| minutes <= max),
            None => true,
        }
    }

    /// Filter then paginate
    pub fn apply<'a, I>(&self, recipes: I) -> Vec<CandidateRecipe>
    where
        I: IntoIterator<Item = &'a CandidateRecipe>,
    {
        recipes
            .into_iter()
            .filter(|recipe| self.matches(recipe))
            .skip(self.offset)
            .take(self.number.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

fn contains_ignore_case(values: &[String], wanted: &str) -> bool {
    let wanted = wanted.trim();
    values
        .iter()
        .any(|value| value.trim().eq_ignore_ascii_case(wanted))
}
