use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use pantry_matching::MatchSettings;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub matching: MatchSettings,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

/// Where the CLI reads recipes and inventory from when not given on the command line
#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    #[serde(default = "default_recipes_file")]
    pub recipes_file: String,
    #[serde(default)]
    pub inventory_file: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            recipes_file: default_recipes_file(),
            inventory_file: None,
        }
    }
}

fn default_recipes_file() -> String {
    "data/recipes.json".to_owned()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PANTRY__MATCHING__ROUNDING, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("matching.rounding", "half_up")?
            .set_default("matching.waste_prone_weight", 10.0)?
            .set_default("matching.expiring_soon_weight", 15.0)?
            .set_default("matching.expiring_within_days", 3)?
            .set_default("matching.min_match_percentage", 0)?
            .set_default("matching.suggest_substitutes", true)?
            .set_default("sources.recipes_file", "data/recipes.json")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_owned());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PANTRY")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.logging.level.trim().is_empty() {
            return Err("Log level must not be empty".to_owned());
        }
        if self.sources.recipes_file.trim().is_empty() {
            return Err("Recipes file path must not be empty".to_owned());
        }
        self.matching.validate()
    }
}
