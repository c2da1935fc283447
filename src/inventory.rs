use std::path::Path;

use anyhow::{Context, Result};
use pantry_shared::{Inventory, InventoryItem};

/// Build the inventory from an optional JSON file plus names given on the command line
///
/// The file holds a JSON array of names or `{name, quantity, unit, expires_on}` objects.
/// Command line names are appended after the file's items.
pub async fn load_inventory(path: Option<&Path>, names: &[String]) -> Result<Inventory> {
    let mut inventory = match path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read inventory file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid inventory file {}", path.display()))?
        }
        None => Inventory::default(),
    };

    for name in names.iter().filter(|name| !name.trim().is_empty()) {
        inventory.push(InventoryItem::new(name.trim()));
    }

    tracing::debug!(items = inventory.len(), "inventory loaded");

    Ok(inventory)
}
