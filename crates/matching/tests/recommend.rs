use async_trait::async_trait;
use pantry_matching::{
    CandidateRecipe, JsonFileRecipeSource, MatchSettings, RecipeMatcher, RecipeQuery,
    RecipeSource, RecipeSourceError,
};
use pantry_shared::{Inventory, InventoryItem};
use temp_dir::TempDir;
use time::macros::date;

const RECIPES: &str = r#"[
    {
        "id": "omelette",
        "title": "Spinach Omelette",
        "requiredIngredients": ["eggs", "spinach", "butter"],
        "cuisines": ["French"],
        "readyInMinutes": 15
    },
    {
        "id": "fried-rice",
        "title": "Fried Rice",
        "requiredIngredients": ["rice", "eggs", "soy sauce", {"name": "green peas", "quantity": 100, "unit": "g"}],
        "cuisines": ["Chinese"],
        "readyInMinutes": 20
    },
    {
        "id": "risotto",
        "title": "Mushroom Risotto",
        "requiredIngredients": ["arborio rice", "mushrooms", "parmesan", "white wine", "chicken broth"],
        "cuisines": ["Italian"],
        "readyInMinutes": 45
    }
]"#;

fn inventory() -> Inventory {
    Inventory::new(vec![
        InventoryItem::new("Eggs"),
        InventoryItem::new("Baby Spinach").expiring(date!(2025 - 03 - 11)),
        InventoryItem::new("Coconut Oil"),
        InventoryItem::new("Jasmine Rice"),
        InventoryItem::new("Tamari"),
    ])
}

struct FailingSource(fn() -> RecipeSourceError);

#[async_trait]
impl RecipeSource for FailingSource {
    async fn search(&self, _query: &RecipeQuery) -> Result<Vec<CandidateRecipe>, RecipeSourceError> {
        Err((self.0)())
    }
}

#[tokio::test]
async fn recommend_from_json_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("recipes.json");
    std::fs::write(&path, RECIPES)?;

    let source = JsonFileRecipeSource::new(path);
    let matches = RecipeMatcher::default()
        .recommend(&source, &RecipeQuery::default(), &inventory(), date!(2025 - 03 - 10))
        .await?;

    let ids: Vec<_> = matches.iter().map(|m| m.recipe_id.as_str()).collect();
    assert_eq!(ids, vec!["omelette", "fried-rice", "risotto"]);

    let omelette = &matches[0];
    assert_eq!(omelette.match_percentage, 67);
    assert_eq!(omelette.waste_prone_used, vec!["Baby Spinach"]);
    assert_eq!(omelette.expiring_used, vec!["Baby Spinach"]);
    let butter = &omelette.missing_ingredients[0];
    assert_eq!(butter.name, "butter");
    assert_eq!(
        butter.substitution.as_ref().map(|s| (s.substitute.as_str(), s.available)),
        Some(("coconut oil", true))
    );

    let fried_rice = &matches[1];
    assert_eq!(fried_rice.match_percentage, 50);
    assert_eq!(fried_rice.missing_ingredients.len(), 2);
    assert!(fried_rice.missing_ingredients[1].substitution.is_none());

    Ok(())
}

#[tokio::test]
async fn recommend_applies_query_filters() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("recipes.json");
    std::fs::write(&path, RECIPES)?;

    let query = RecipeQuery {
        max_ready_minutes: Some(30),
        cuisine: Some("chinese".to_owned()),
        ..Default::default()
    };
    let matches = RecipeMatcher::default()
        .recommend(
            &JsonFileRecipeSource::new(path),
            &query,
            &inventory(),
            date!(2025 - 03 - 10),
        )
        .await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Fried Rice");

    Ok(())
}

#[tokio::test]
async fn recommend_drops_weak_matches() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("recipes.json");
    std::fs::write(&path, RECIPES)?;

    let matcher = RecipeMatcher::new(MatchSettings {
        min_match_percentage: 60,
        ..Default::default()
    });
    let matches = matcher
        .recommend(
            &JsonFileRecipeSource::new(path),
            &RecipeQuery::default(),
            &inventory(),
            date!(2025 - 03 - 10),
        )
        .await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].recipe_id, "omelette");

    Ok(())
}

#[tokio::test]
async fn malformed_payload_is_reported() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("recipes.json");
    std::fs::write(&path, r#"[{"id": "1"}]"#)?;

    let result = RecipeMatcher::default()
        .recommend(
            &JsonFileRecipeSource::new(path),
            &RecipeQuery::default(),
            &Inventory::default(),
            date!(2025 - 03 - 10),
        )
        .await;

    assert!(matches!(result, Err(RecipeSourceError::MalformedPayload(_))));

    Ok(())
}

#[tokio::test]
async fn source_errors_reach_the_caller() {
    let cases: Vec<fn() -> RecipeSourceError> = vec![
        || RecipeSourceError::RateLimited,
        || RecipeSourceError::ServiceUnavailable("maintenance".to_owned()),
        || RecipeSourceError::Network("connection reset".to_owned()),
        || RecipeSourceError::MissingApiKey,
        || RecipeSourceError::Generic("unexpected".to_owned()),
    ];

    for make_error in cases {
        let expected = make_error().to_string();
        let source: Box<dyn RecipeSource> = Box::new(FailingSource(make_error));

        let result = RecipeMatcher::default()
            .recommend(
                source.as_ref(),
                &RecipeQuery::default(),
                &Inventory::default(),
                date!(2025 - 03 - 10),
            )
            .await;

        assert_eq!(result.unwrap_err().to_string(), expected);
    }
}
