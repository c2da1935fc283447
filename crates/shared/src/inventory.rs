use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// A food item the user has on hand
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "InventoryItemInput")]
pub struct InventoryItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Expiration date, `YYYY-MM-DD` in JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<Date>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
            expires_on: None,
        }
    }

    pub fn expiring(mut self, expires_on: Date) -> Self {
        self.expires_on = Some(expires_on);
        self
    }

    /// True when the item expires on or before `today + days`.
    ///
    /// Already expired items count as expiring soon. Items without a date never do.
    pub fn expires_within(&self, today: Date, days: u32) -> bool {
        let Some(expires_on) = self.expires_on else {
            return false;
        };

        match today.checked_add(Duration::days(i64::from(days))) {
            Some(limit) => expires_on <= limit,
            None => true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InventoryItemInput {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        quantity: Option<f32>,
        #[serde(default)]
        unit: Option<String>,
        #[serde(default)]
        expires_on: Option<Date>,
    },
}

impl From<InventoryItemInput> for InventoryItem {
    fn from(input: InventoryItemInput) -> Self {
        match input {
            InventoryItemInput::Name(name) => Self::new(name),
            InventoryItemInput::Detailed {
                name,
                quantity,
                unit,
                expires_on,
            } => Self {
                name,
                quantity,
                unit,
                expires_on,
            },
        }
    }
}

/// The user's current food inventory, in the order the provider listed it
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(InventoryItem::new).collect())
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    pub fn expiring_within(&self, today: Date, days: u32) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item.expires_within(today, days))
            .collect()
    }
}

impl FromIterator<InventoryItem> for Inventory {
    fn from_iter<T: IntoIterator<Item = InventoryItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
