use pantry_shared::fuzzy_contains;

/// Perishable ingredient name fragments, lowercase
pub const WASTE_PRONE: &[&str] = &[
    // Fruit
    "strawberries",
    "raspberries",
    "blueberries",
    "blackberries",
    "berries",
    "bananas",
    "avocado",
    "peaches",
    "grapes",
    // Leafy greens and herbs
    "lettuce",
    "spinach",
    "arugula",
    "salad greens",
    "cilantro",
    "parsley",
    "basil",
    "fresh herbs",
    // Vegetables
    "mushrooms",
    "asparagus",
    "zucchini",
    "tomatoes",
    "bean sprouts",
    "green onions",
    // Dairy
    "milk",
    "cream",
    "yogurt",
    "soft cheese",
    "ricotta",
    // Meat and seafood
    "ground beef",
    "chicken",
    "fish",
    "shrimp",
    "shellfish",
    // Bakery
    "bread",
    "tortillas",
];

/// Flags ingredients that spoil quickly
///
/// Used as a ranking signal so recipes that use up perishables are suggested first.
/// Never used as a filter.
pub struct WasteProneClassifier;

impl WasteProneClassifier {
    /// True when the lowercased ingredient contains a listed fragment or a listed
    /// fragment contains it
    pub fn is_waste_prone(ingredient: &str) -> bool {
        let normalized = ingredient.to_lowercase();

        WASTE_PRONE
            .iter()
            .any(|fragment| fuzzy_contains(&normalized, fragment))
    }

    pub fn fragments() -> &'static [&'static str] {
        WASTE_PRONE
    }
}
