use std::path::PathBuf;

use anyhow::Result;
use pantry::config::Config;
use pantry_matching::{JsonFileRecipeSource, PercentRounding, RecipeMatcher, RecipeQuery};
use serde_json::{Value, json};
use time::OffsetDateTime;

pub struct MatchArgs {
    pub recipes: Option<PathBuf>,
    pub inventory: Option<PathBuf>,
    pub have: Vec<String>,
    pub query: RecipeQuery,
    pub rounding: Option<PercentRounding>,
}

#[tracing::instrument(skip_all)]
pub async fn run(config: Config, args: MatchArgs) -> Result<Value> {
    let recipes_path = args
        .recipes
        .unwrap_or_else(|| PathBuf::from(&config.sources.recipes_file));
    let inventory_path = args
        .inventory
        .or_else(|| config.sources.inventory_file.as_ref().map(PathBuf::from));

    let inventory = pantry::inventory::load_inventory(inventory_path.as_deref(), &args.have).await?;

    let mut settings = config.matching;
    if let Some(rounding) = args.rounding {
        settings.rounding = rounding;
    }

    let source = JsonFileRecipeSource::new(recipes_path);
    let today = OffsetDateTime::now_utc().date();
    let matches = RecipeMatcher::new(settings)
        .recommend(&source, &args.query, &inventory, today)
        .await?;

    tracing::info!(
        recipes = matches.len(),
        inventory = inventory.len(),
        "recipes matched"
    );

    Ok(json!({
        "date": today.to_string(),
        "matches": matches,
    }))
}
