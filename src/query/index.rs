use crate::corpus::{Corpus, Recipe, Restaurant};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Lookup structures built once from the static corpus, so queries cost
/// O(matching recipes) instead of a scan of the whole corpus.
///
/// Every container is ordered: result construction iterates these directly,
/// and the output order must never depend on hash order.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    restaurants_by_id: BTreeMap<String, Restaurant>,
    recipes_by_id: BTreeMap<String, Recipe>,
    all_recipe_ids: BTreeSet<String>,
    recipe_ids_by_restaurant: BTreeMap<String, BTreeSet<String>>,
    recipe_ids_by_ingredient: BTreeMap<String, BTreeSet<String>>,
}

impl CorpusIndex {
    /// Build the index. Pure function of the corpus; runs once at startup.
    pub fn build(corpus: Corpus) -> Self {
        let Corpus {
            restaurants,
            recipes,
            recipe_ids_by_ingredient,
        } = corpus;

        let all_recipe_ids: BTreeSet<String> = recipes.keys().cloned().collect();

        let mut recipe_ids_by_restaurant: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for recipe in recipes.values() {
            recipe_ids_by_restaurant
                .entry(recipe.restaurant_id.clone())
                .or_default()
                .insert(recipe.id.clone());
        }

        // Use the precomputed inverted index when the corpus ships one,
        // otherwise derive it from the forward ingredient sets. The two are
        // behaviorally equivalent for a consistent corpus.
        let recipe_ids_by_ingredient = recipe_ids_by_ingredient.unwrap_or_else(|| {
            let mut inverted: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for recipe in recipes.values() {
                for ingredient in &recipe.ingredients {
                    inverted
                        .entry(ingredient.clone())
                        .or_default()
                        .insert(recipe.id.clone());
                }
            }
            inverted
        });

        info!(
            "Index built: {} restaurants, {} recipes, {} ingredient tags",
            restaurants.len(),
            recipes.len(),
            recipe_ids_by_ingredient.len()
        );

        CorpusIndex {
            restaurants_by_id: restaurants,
            recipes_by_id: recipes,
            all_recipe_ids,
            recipe_ids_by_restaurant,
            recipe_ids_by_ingredient,
        }
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants_by_id.get(id)
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes_by_id.get(id)
    }

    /// All restaurants in id order.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants_by_id.values()
    }

    pub fn all_recipe_ids(&self) -> &BTreeSet<String> {
        &self.all_recipe_ids
    }

    /// Recipe ids carrying the given ingredient tag. `None` for a tag the
    /// corpus has never seen.
    pub fn recipe_ids_for_ingredient(&self, tag: &str) -> Option<&BTreeSet<String>> {
        self.recipe_ids_by_ingredient.get(tag)
    }

    /// A restaurant's full menu, in recipe id order.
    pub fn menu(&self, restaurant_id: &str) -> Vec<&Recipe> {
        self.recipe_ids_by_restaurant
            .get(restaurant_id)
            .map(|ids| ids.iter().filter_map(|id| self.recipes_by_id.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants_by_id.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes_by_id.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.recipe_ids_by_ingredient.len()
    }
}
