pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bistro")]
#[command(about = "Bistro - ingredient-based restaurant and menu search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List restaurants, optionally filtered by ingredient tags
    Restaurants {
        /// Ingredient tags to filter by (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        ingredients: Vec<String>,

        /// Number of listings to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Maximum number of listings to return
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one restaurant with its complete menu
    Restaurant {
        /// Restaurant ID
        id: String,
    },

    /// List recipes, optionally filtered by ingredient tags
    Recipes {
        /// Ingredient tags to filter by (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        ingredients: Vec<String>,

        /// Number of listings to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Maximum number of listings to return
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print corpus statistics
    Stats,

    /// Load the corpus files and report on their integrity
    Validate,
}
