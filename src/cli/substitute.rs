use std::path::PathBuf;

use anyhow::Result;
use pantry::config::Config;
use pantry_substitution::SubstitutionCatalog;
use serde_json::{Value, json};

/// Substitutes of every loosely matching key, or with `exact` only the list declared
/// for that key (`null` when it is not a catalog key)
pub fn list(ingredient: &str, exact: bool) -> Value {
    let substitutes = if exact {
        json!(SubstitutionCatalog::substitutes_for_key(ingredient))
    } else {
        json!(SubstitutionCatalog::find_substitutions(ingredient))
    };

    json!({
        "ingredient": ingredient,
        "substitutes": substitutes,
    })
}

pub async fn pick(
    config: &Config,
    missing: &str,
    inventory_override: Option<PathBuf>,
    have: &[String],
) -> Result<Value> {
    let inventory_path = inventory_override.or_else(|| {
        config
            .sources
            .inventory_file
            .as_ref()
            .map(PathBuf::from)
    });
    let inventory = pantry::inventory::load_inventory(inventory_path.as_deref(), have).await?;
    let substitution =
        SubstitutionCatalog::find_available_substitute(missing, &inventory.names());

    match &substitution {
        Some(s) if s.available => {
            tracing::info!(missing, substitute = %s.substitute, "substitute on hand")
        }
        Some(s) => {
            tracing::info!(missing, substitute = %s.substitute, "substitute must be bought")
        }
        None => tracing::info!(missing, "no known substitute"),
    }

    Ok(json!({
        "missing": missing,
        "substitution": substitution,
    }))
}
