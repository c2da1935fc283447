//! Tests for CLI commands (substitutes, substitute, waste-prone, match)

use std::process::Command;

use serde_json::{Value, json};
use temp_dir::TempDir;

fn pantry(args: &[&str]) -> anyhow::Result<Value> {
    let output = Command::new(env!("CARGO_BIN_EXE_pantry"))
        .args(["--config", "/nonexistent/pantry.toml"])
        .args(args)
        .env("RUST_LOG", "off")
        .output()?;

    anyhow::ensure!(
        output.status.success(),
        "pantry {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_cli_help_shows_all_commands() -> anyhow::Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_pantry"))
        .arg("--help")
        .output()?;

    let help_text = String::from_utf8_lossy(&output.stdout);

    for command in ["substitutes", "substitute", "waste-prone", "match"] {
        assert!(help_text.contains(command), "{command} command not in help");
    }

    Ok(())
}

#[test]
fn test_substitutes_command() -> anyhow::Result<()> {
    let output = pantry(&["substitutes", "Soy Sauce"])?;

    assert_eq!(
        output["substitutes"],
        json!(["tamari", "coconut aminos", "worcestershire sauce"])
    );

    Ok(())
}

#[test]
fn test_substitutes_command_exact_key() -> anyhow::Result<()> {
    let output = pantry(&["substitutes", "tofu", "--exact"])?;

    assert_eq!(output["substitutes"], json!(["tempeh", "seitan", "paneer"]));

    Ok(())
}

#[test]
fn test_substitute_command_prefers_inventory() -> anyhow::Result<()> {
    let output = pantry(&["substitute", "milk", "--have", "oat milk"])?;

    assert_eq!(
        output["substitution"],
        json!({"substitute": "oat milk", "available": true})
    );

    Ok(())
}

#[test]
fn test_waste_prone_command() -> anyhow::Result<()> {
    let output = pantry(&["waste-prone", "Fresh Spinach", "rice"])?;

    assert_eq!(
        output,
        json!([
            {"ingredient": "Fresh Spinach", "waste_prone": true},
            {"ingredient": "rice", "waste_prone": false}
        ])
    );

    Ok(())
}

#[test]
fn test_match_command_with_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let recipes = dir.child("recipes.json");
    std::fs::write(
        &recipes,
        r#"[
            {"id": "a", "title": "Toast", "ingredients": ["bread"], "cuisines": ["french"]},
            {"id": "b", "title": "Rice Bowl", "ingredients": ["rice", "tofu"], "cuisines": ["japanese"]}
        ]"#,
    )?;
    let recipes = recipes.to_string_lossy().into_owned();

    let output = pantry(&[
        "match", "--recipes", &recipes, "--have", "rice", "--cuisine", "Japanese",
    ])?;

    let matches = output["matches"].as_array().cloned().unwrap_or_default();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["recipe_id"], "b");
    assert_eq!(matches[0]["match_percentage"], 50);
    assert_eq!(
        matches[0]["missing_ingredients"][0]["substitution"],
        json!({"substitute": "tempeh", "available": false})
    );

    Ok(())
}
