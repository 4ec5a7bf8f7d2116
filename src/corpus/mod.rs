pub mod loader;
pub mod models;

// Re-exports
pub use loader::load_corpus;
pub use models::{Recipe, Restaurant};

use std::collections::{BTreeMap, BTreeSet};

/// The full static data set available to the query layer. Loaded once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub restaurants: BTreeMap<String, Restaurant>,
    pub recipes: BTreeMap<String, Recipe>,
    /// Precomputed ingredient -> recipe-id index, if the corpus source ships
    /// one. When `None` the index builder derives it from the recipes.
    pub recipe_ids_by_ingredient: Option<BTreeMap<String, BTreeSet<String>>>,
}

impl Corpus {
    /// Build a corpus from plain record lists, keying each collection by id.
    /// Used by tests and by callers that assemble data in process.
    pub fn from_records(restaurants: Vec<Restaurant>, recipes: Vec<Recipe>) -> Self {
        Corpus {
            restaurants: restaurants.into_iter().map(|r| (r.id.clone(), r)).collect(),
            recipes: recipes.into_iter().map(|r| (r.id.clone(), r)).collect(),
            recipe_ids_by_ingredient: None,
        }
    }
}
