use pantry_substitution::WasteProneClassifier;
use serde_json::{Value, json};

pub fn classify(ingredients: &[String]) -> Value {
    ingredients
        .iter()
        .map(|ingredient| {
            json!({
                "ingredient": ingredient,
                "waste_prone": WasteProneClassifier::is_waste_prone(ingredient),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let output = classify(&["Fresh Strawberries".to_owned(), "canned beans".to_owned()]);

        assert_eq!(
            output,
            json!([
                {"ingredient": "Fresh Strawberries", "waste_prone": true},
                {"ingredient": "canned beans", "waste_prone": false},
            ])
        );
    }
}
