use serde::{Deserialize, Serialize};

/// Ingredient reference as listed by a recipe or held in an inventory.
///
/// Only the name takes part in matching; quantity and unit are carried along for display.
/// Deserializes either from a bare string (`"butter"`) or from an object
/// (`{"name": "butter", "quantity": 2.0, "unit": "tbsp"}`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "IngredientInput")]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }
}

impl From<&str> for Ingredient {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Ingredient {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientInput {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        quantity: Option<f32>,
        #[serde(default)]
        unit: Option<String>,
    },
}

impl From<IngredientInput> for Ingredient {
    fn from(input: IngredientInput) -> Self {
        match input {
            IngredientInput::Name(name) => Self::new(name),
            IngredientInput::Detailed {
                name,
                quantity,
                unit,
            } => Self {
                name,
                quantity,
                unit,
            },
        }
    }
}
