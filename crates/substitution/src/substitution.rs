use pantry_shared::{fuzzy_contains, normalize};
use serde::{Deserialize, Serialize};

use crate::catalog::{CATALOG, Category, SubstitutionEntry};

/// Substitute suggested for a missing ingredient
///
/// `available` tells whether the substitute is already in the inventory or has to be
/// bought. The absence of a `Substitution` (`None`) means no substitute is known at all.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub substitute: String,
    pub available: bool,
}

/// Substitution Service
///
/// Stateless lookups over the static substitution table in [`CATALOG`].
///
/// Names are matched loosely: a catalog key matches an ingredient when either one
/// contains the other after normalization, so "unsalted butter" finds "butter" and
/// "egg" finds "eggs".
pub struct SubstitutionCatalog;

impl SubstitutionCatalog {
    /// All substitutes for an ingredient
    ///
    /// Every key of every category is tested; substitutes of all matching keys are
    /// collected in category order then declaration order, and repeated values are
    /// dropped keeping their first position. Unknown ingredients yield an empty list.
    pub fn find_substitutions(ingredient: &str) -> Vec<String> {
        let normalized = normalize(ingredient);
        let mut substitutes: Vec<String> = Vec::new();

        for (_, entry) in Self::matching_entries(&normalized) {
            for substitute in entry.substitutes {
                if !substitutes.iter().any(|s| s == substitute) {
                    substitutes.push((*substitute).to_owned());
                }
            }
        }

        tracing::trace!(
            ingredient = normalized.as_str(),
            count = substitutes.len(),
            "substitutions looked up"
        );

        substitutes
    }

    /// Pick a substitute for a missing ingredient, preferring what is on hand
    ///
    /// Returns the first substitute (in [`Self::find_substitutions`] order) matching one
    /// of the available ingredients, marked available. When none is on hand, the first
    /// substitute is returned marked unavailable so it can go on a shopping list.
    /// Returns `None` only when the ingredient has no known substitute.
    pub fn find_available_substitute<S: AsRef<str>>(
        missing_ingredient: &str,
        available_ingredients: &[S],
    ) -> Option<Substitution> {
        let candidates = Self::find_substitutions(missing_ingredient);
        let available: Vec<String> = available_ingredients
            .iter()
            .map(|name| name.as_ref().to_lowercase())
            .collect();

        let on_hand = candidates.iter().find(|candidate| {
            available
                .iter()
                .any(|name| fuzzy_contains(name, candidate))
        });

        if let Some(substitute) = on_hand {
            return Some(Substitution {
                substitute: substitute.clone(),
                available: true,
            });
        }

        candidates.into_iter().next().map(|substitute| Substitution {
            substitute,
            available: false,
        })
    }

    /// Declared substitutes for an exact canonical key
    pub fn substitutes_for_key(key: &str) -> Option<&'static [&'static str]> {
        let normalized = normalize(key);

        CATALOG
            .iter()
            .flat_map(|category| category.entries())
            .find(|entry| entry.ingredient == normalized)
            .map(|entry| entry.substitutes)
    }

    /// Catalog entries whose key loosely matches the ingredient, with their category
    pub fn matching_entries(
        ingredient: &str,
    ) -> impl Iterator<Item = (Category, &'static SubstitutionEntry)> + '_ {
        CATALOG.iter().flat_map(move |category| {
            category
                .entries()
                .iter()
                .filter(move |entry| fuzzy_contains(ingredient, entry.ingredient))
                .map(move |entry| (*category, entry))
        })
    }

    pub fn categories() -> impl Iterator<Item = (Category, &'static [SubstitutionEntry])> {
        CATALOG.iter().map(|category| (*category, category.entries()))
    }
}
