use serde::Serialize;
use strum::{AsRefStr, Display};

/// Grouping of the substitution table
///
/// Categories are scanned in `CATALOG` order, which decides which substitute is
/// offered first when several keys match the same ingredient.
#[derive(Display, AsRefStr, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Dairy,
    Proteins,
    Baking,
    #[strum(serialize = "Fats & Oils")]
    #[serde(rename = "Fats & Oils")]
    FatsAndOils,
    Produce,
    #[strum(serialize = "Pantry Staples")]
    #[serde(rename = "Pantry Staples")]
    PantryStaples,
    #[strum(serialize = "Condiments & Seasonings")]
    #[serde(rename = "Condiments & Seasonings")]
    CondimentsAndSeasonings,
}

/// Canonical ingredient with its substitutes, most preferred first. Never empty.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubstitutionEntry {
    pub ingredient: &'static str,
    pub substitutes: &'static [&'static str],
}

const fn entry(ingredient: &'static str, substitutes: &'static [&'static str]) -> SubstitutionEntry {
    SubstitutionEntry {
        ingredient,
        substitutes,
    }
}

/// Category scan order
pub const CATALOG: [Category; 7] = [
    Category::Dairy,
    Category::Proteins,
    Category::Baking,
    Category::FatsAndOils,
    Category::Produce,
    Category::PantryStaples,
    Category::CondimentsAndSeasonings,
];

impl Category {
    pub const fn entries(self) -> &'static [SubstitutionEntry] {
        match self {
            Category::Dairy => DAIRY,
            Category::Proteins => PROTEINS,
            Category::Baking => BAKING,
            Category::FatsAndOils => FATS_AND_OILS,
            Category::Produce => PRODUCE,
            Category::PantryStaples => PANTRY_STAPLES,
            Category::CondimentsAndSeasonings => CONDIMENTS_AND_SEASONINGS,
        }
    }
}

const DAIRY: &[SubstitutionEntry] = &[
    entry(
        "milk",
        &["soy milk", "almond milk", "oat milk", "coconut milk", "water"],
    ),
    entry(
        "butter",
        &[
            "margarine",
            "coconut oil",
            "vegetable oil",
            "applesauce",
            "greek yogurt",
        ],
    ),
    entry(
        "buttermilk",
        &["milk with lemon juice", "milk with vinegar", "plain yogurt"],
    ),
    entry(
        "heavy cream",
        &[
            "half and half",
            "evaporated milk",
            "coconut cream",
            "milk with butter",
        ],
    ),
    entry(
        "sour cream",
        &["greek yogurt", "plain yogurt", "cottage cheese", "cream cheese"],
    ),
    entry("yogurt", &["sour cream", "buttermilk", "silken tofu"]),
    entry(
        "cream cheese",
        &["ricotta", "mascarpone", "cottage cheese", "greek yogurt"],
    ),
    entry(
        "parmesan",
        &["pecorino romano", "grana padano", "nutritional yeast"],
    ),
    entry("cheddar", &["colby", "monterey jack", "gouda"]),
    entry("mozzarella", &["provolone", "fontina", "monterey jack"]),
];

const PROTEINS: &[SubstitutionEntry] = &[
    entry(
        "eggs",
        &[
            "flax egg",
            "chia egg",
            "applesauce",
            "mashed banana",
            "silken tofu",
        ],
    ),
    entry("chicken", &["turkey", "tofu", "chickpeas", "seitan"]),
    entry(
        "ground beef",
        &["ground turkey", "lentils", "mushrooms", "plant-based ground"],
    ),
    entry("beef", &["lamb", "portobello mushrooms", "seitan"]),
    entry("pork", &["chicken thighs", "turkey", "jackfruit"]),
    entry(
        "bacon",
        &["pancetta", "prosciutto", "smoked tempeh", "turkey bacon"],
    ),
    entry("shrimp", &["scallops", "white fish", "hearts of palm"]),
    entry("salmon", &["trout", "arctic char", "tuna"]),
    entry("tofu", &["tempeh", "seitan", "paneer"]),
];

const BAKING: &[SubstitutionEntry] = &[
    entry(
        "flour",
        &["whole wheat flour", "oat flour", "almond flour", "rice flour"],
    ),
    entry(
        "sugar",
        &["honey", "maple syrup", "coconut sugar", "agave nectar"],
    ),
    entry(
        "brown sugar",
        &["white sugar with molasses", "coconut sugar", "maple sugar"],
    ),
    entry(
        "baking powder",
        &["baking soda with cream of tartar", "self-rising flour"],
    ),
    entry("baking soda", &["baking powder", "potassium bicarbonate"]),
    entry(
        "cornstarch",
        &[
            "arrowroot powder",
            "potato starch",
            "tapioca starch",
            "all-purpose flour",
        ],
    ),
    entry("yeast", &["baking soda with lemon juice", "sourdough starter"]),
    entry(
        "vanilla extract",
        &["maple syrup", "almond extract", "vanilla bean"],
    ),
    entry(
        "chocolate chips",
        &["chopped dark chocolate", "cacao nibs", "carob chips"],
    ),
];

const FATS_AND_OILS: &[SubstitutionEntry] = &[
    entry(
        "olive oil",
        &["avocado oil", "vegetable oil", "canola oil", "melted butter"],
    ),
    entry(
        "vegetable oil",
        &["canola oil", "sunflower oil", "applesauce", "melted butter"],
    ),
    entry("coconut oil", &["butter", "vegetable oil", "avocado oil"]),
    entry("shortening", &["butter", "lard", "coconut oil"]),
];

const PRODUCE: &[SubstitutionEntry] = &[
    entry(
        "lemon juice",
        &["lime juice", "white wine vinegar", "orange juice"],
    ),
    entry(
        "onion",
        &["shallots", "leeks", "scallions", "onion powder"],
    ),
    entry("garlic", &["garlic powder", "shallots", "garlic salt"]),
    entry("basil", &["oregano", "spinach", "parsley"]),
    entry("spinach", &["kale", "swiss chard", "arugula"]),
    entry(
        "tomatoes",
        &["canned tomatoes", "sun-dried tomatoes", "red bell pepper"],
    ),
    entry("bell pepper", &["poblano pepper", "zucchini", "celery"]),
    entry("potatoes", &["sweet potatoes", "cauliflower", "turnips"]),
    entry("mushrooms", &["zucchini", "eggplant", "sun-dried tomatoes"]),
    entry("banana", &["applesauce", "pumpkin puree", "avocado"]),
];

const PANTRY_STAPLES: &[SubstitutionEntry] = &[
    entry("rice", &["quinoa", "cauliflower rice", "couscous", "barley"]),
    entry(
        "pasta",
        &["zucchini noodles", "spaghetti squash", "rice noodles"],
    ),
    entry(
        "breadcrumbs",
        &["crushed crackers", "panko", "rolled oats", "crushed cornflakes"],
    ),
    entry(
        "chicken broth",
        &["vegetable broth", "bouillon with water", "white wine"],
    ),
    entry(
        "peanut butter",
        &[
            "almond butter",
            "sunflower seed butter",
            "cashew butter",
            "tahini",
        ],
    ),
    entry("rolled oats", &["quick oats", "quinoa flakes", "rice flakes"]),
];

const CONDIMENTS_AND_SEASONINGS: &[SubstitutionEntry] = &[
    entry(
        "soy sauce",
        &["tamari", "coconut aminos", "worcestershire sauce"],
    ),
    entry(
        "white wine",
        &["chicken broth", "white grape juice", "apple cider vinegar"],
    ),
    entry("red wine", &["beef broth", "grape juice", "red wine vinegar"]),
    entry("vinegar", &["lemon juice", "lime juice", "white wine"]),
    entry(
        "honey",
        &["maple syrup", "agave nectar", "brown rice syrup"],
    ),
    entry(
        "mayonnaise",
        &["greek yogurt", "mashed avocado", "sour cream"],
    ),
    entry("ketchup", &["tomato paste with vinegar", "barbecue sauce"]),
    entry("mustard", &["wasabi", "horseradish", "mustard powder"]),
    entry("salt", &["soy sauce", "lemon juice", "herb seasoning"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_has_substitutes() {
        for category in CATALOG {
            for entry in category.entries() {
                assert!(
                    !entry.substitutes.is_empty(),
                    "{} in {category} has no substitutes",
                    entry.ingredient
                );
            }
        }
    }

    #[test]
    fn test_keys_are_normalized() {
        for category in CATALOG {
            for entry in category.entries() {
                assert_eq!(
                    entry.ingredient,
                    entry.ingredient.trim().to_lowercase(),
                    "key {:?} must be lowercase and trimmed",
                    entry.ingredient
                );
            }
        }
    }

    #[test]
    fn test_keys_unique_across_catalog() {
        let mut seen = HashSet::new();

        for category in CATALOG {
            for entry in category.entries() {
                assert!(
                    seen.insert(entry.ingredient),
                    "duplicate key {:?}",
                    entry.ingredient
                );
            }
        }
    }

    #[test]
    fn test_catalog_lists_every_category_once() {
        let unique: HashSet<_> = CATALOG.iter().collect();

        assert_eq!(unique.len(), CATALOG.len());
        assert_eq!(CATALOG[0], Category::Dairy);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Dairy.to_string(), "Dairy");
        assert_eq!(Category::FatsAndOils.to_string(), "Fats & Oils");
        assert_eq!(Category::PantryStaples.as_ref(), "Pantry Staples");
        assert_eq!(
            Category::CondimentsAndSeasonings.to_string(),
            "Condiments & Seasonings"
        );
    }
}
