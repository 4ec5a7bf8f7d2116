use bistro::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bistro=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Restaurants {
            ingredients,
            offset,
            limit,
        } => {
            let engine = commands::load_engine(&settings)?;
            let query = commands::listing_query(&settings, ingredients, offset, limit);
            commands::restaurants(&engine, &query)?;
        }
        Commands::Restaurant { id } => {
            let engine = commands::load_engine(&settings)?;
            commands::restaurant(&engine, &id)?;
        }
        Commands::Recipes {
            ingredients,
            offset,
            limit,
        } => {
            let engine = commands::load_engine(&settings)?;
            let query = commands::listing_query(&settings, ingredients, offset, limit);
            commands::recipes(&engine, &query)?;
        }
        Commands::Stats => {
            let engine = commands::load_engine(&settings)?;
            commands::stats(&engine)?;
        }
        Commands::Validate => {
            commands::validate(&settings)?;
        }
    }

    Ok(())
}
