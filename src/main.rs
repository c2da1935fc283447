mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry_matching::PercentRounding;

/// pantry - Ingredient substitutions and waste-aware recipe matching
#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Ingredient substitutions and waste-aware recipe matching", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known substitute for an ingredient
    Substitutes {
        ingredient: String,

        /// Only the substitutes declared for this exact catalog key
        #[arg(long)]
        exact: bool,
    },
    /// Suggest one substitute for a missing ingredient, preferring what is on hand
    Substitute {
        missing: String,

        /// Ingredient on hand (repeatable)
        #[arg(long = "have")]
        have: Vec<String>,

        /// JSON inventory file (overrides config file)
        #[arg(long)]
        inventory: Option<PathBuf>,
    },
    /// Tell whether ingredients spoil quickly
    WasteProne {
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Rank recipes by how well they use the inventory
    Match {
        /// JSON recipe file (overrides config file)
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// JSON inventory file (overrides config file)
        #[arg(long)]
        inventory: Option<PathBuf>,

        /// Ingredient on hand (repeatable)
        #[arg(long = "have")]
        have: Vec<String>,

        #[arg(long)]
        cuisine: Option<String>,

        #[arg(long)]
        diet: Option<String>,

        /// Maximum total time in minutes
        #[arg(long)]
        max_ready_minutes: Option<u32>,

        /// Maximum number of recipes
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Match percentage rounding: half_up, floor or ceil (overrides config file)
        #[arg(long)]
        rounding: Option<PercentRounding>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantry::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantry::observability::init_observability(
        "pantry",
        env!("CARGO_PKG_VERSION"),
        &config.logging.level,
        config.logging.format,
    )?;

    let output = match cli.command {
        Commands::Substitutes { ingredient, exact } => {
            cli::substitute::list(&ingredient, exact)
        }
        Commands::Substitute {
            missing,
            have,
            inventory,
        } => cli::substitute::pick(&config, &missing, inventory, &have).await?,
        Commands::WasteProne { ingredients } => cli::waste::classify(&ingredients),
        Commands::Match {
            recipes,
            inventory,
            have,
            cuisine,
            diet,
            max_ready_minutes,
            limit,
            offset,
            rounding,
        } => {
            let args = cli::recommend::MatchArgs {
                recipes,
                inventory,
                have,
                query: pantry_matching::RecipeQuery {
                    cuisine,
                    diet,
                    max_ready_minutes,
                    number: limit,
                    offset,
                },
                rounding,
            };
            cli::recommend::run(config, args).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
