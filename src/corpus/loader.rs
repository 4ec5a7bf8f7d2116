use crate::corpus::models::{Recipe, Restaurant};
use crate::corpus::Corpus;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::info;

/// Load the corpus from its JSON source files.
///
/// Both files hold objects keyed by id, matching the shape the backing data
/// is exported in. The loader checks referential integrity up front so the
/// query layer can treat the corpus as trusted from then on.
pub fn load_corpus(
    restaurants_path: impl AsRef<Path>,
    recipes_path: impl AsRef<Path>,
    ingredient_index_path: Option<&Path>,
) -> Result<Corpus> {
    let restaurants: BTreeMap<String, Restaurant> = read_json(restaurants_path.as_ref())?;
    let recipes: BTreeMap<String, Recipe> = read_json(recipes_path.as_ref())?;

    let recipe_ids_by_ingredient: Option<BTreeMap<String, BTreeSet<String>>> =
        match ingredient_index_path {
            Some(path) => Some(read_json(path)?),
            None => None,
        };

    let corpus = Corpus {
        restaurants,
        recipes,
        recipe_ids_by_ingredient,
    };
    validate_corpus(&corpus)?;

    info!(
        "Corpus loaded: {} restaurants, {} recipes",
        corpus.restaurants.len(),
        corpus.recipes.len()
    );

    Ok(corpus)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Check the corpus invariants: map keys agree with embedded ids, every
/// recipe belongs to a known restaurant, and a precomputed ingredient index
/// names only known recipes.
fn validate_corpus(corpus: &Corpus) -> Result<()> {
    for (key, restaurant) in &corpus.restaurants {
        if *key != restaurant.id {
            return Err(Error::Corpus(format!(
                "Restaurant keyed as {} carries id {}",
                key, restaurant.id
            )));
        }
    }

    for (key, recipe) in &corpus.recipes {
        if *key != recipe.id {
            return Err(Error::Corpus(format!(
                "Recipe keyed as {} carries id {}",
                key, recipe.id
            )));
        }
        if !corpus.restaurants.contains_key(&recipe.restaurant_id) {
            return Err(Error::Corpus(format!(
                "Recipe {} references unknown restaurant {}",
                recipe.id, recipe.restaurant_id
            )));
        }
    }

    if let Some(index) = &corpus.recipe_ids_by_ingredient {
        for (ingredient, recipe_ids) in index {
            for recipe_id in recipe_ids {
                if !corpus.recipes.contains_key(recipe_id) {
                    return Err(Error::Corpus(format!(
                        "Ingredient index entry {ingredient} references unknown recipe {recipe_id}"
                    )));
                }
            }
        }
    }

    Ok(())
}
