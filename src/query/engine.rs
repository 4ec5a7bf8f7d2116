use crate::corpus::{Corpus, Recipe};
use crate::query::index::CorpusIndex;
use crate::query::matcher::matching_recipe_ids;
use crate::query::rank::RankKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Default page size when a query does not name one.
pub const DEFAULT_LIMIT: usize = 100;

/// Listing query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for ListingQuery {
    fn default() -> Self {
        ListingQuery {
            ingredients: Vec::new(),
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListingQuery {
    pub fn with_ingredients<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ListingQuery {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..ListingQuery::default()
        }
    }

    /// A zero limit clamps to the documented default rather than erroring;
    /// offsets cannot go negative by type.
    fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

/// Restaurant listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantListing {
    pub id: String,
    pub name: String,
}

/// Recipe listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeListing {
    pub id: String,
    pub name: String,
    pub restaurant_id: String,
}

/// Full restaurant record including its complete menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantDetail {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub menu: Vec<Recipe>,
}

/// Corpus-wide counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub total_restaurants: usize,
    pub total_recipes: usize,
    pub total_ingredients: usize,
}

/// The query engine: pure reads over the immutable corpus index. Holds no
/// mutable state, so a single instance serves any number of concurrent
/// readers without locking.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: CorpusIndex,
}

impl QueryEngine {
    pub fn new(corpus: Corpus) -> Self {
        QueryEngine {
            index: CorpusIndex::build(corpus),
        }
    }

    /// List restaurants matching the ingredient filter.
    ///
    /// With no filter every restaurant is a candidate and the listing is
    /// alphabetical by name. With a filter, only restaurants owning at least
    /// one matching recipe appear, ordered by descending match count with
    /// name as the tie-break.
    pub fn list_restaurants(&self, query: &ListingQuery) -> Vec<RestaurantListing> {
        debug!("List restaurants: {:?}", query);

        if query.ingredients.is_empty() {
            // Candidates iterate in id order, so the stable sort leaves
            // equal names in id order.
            let mut listings: Vec<RestaurantListing> = self
                .index
                .restaurants()
                .map(|r| RestaurantListing {
                    id: r.id.clone(),
                    name: r.name.clone(),
                })
                .collect();
            listings.sort_by_cached_key(|r| RankKey::by_name(&r.name));
            return paginate(listings, query.offset, query.effective_limit());
        }

        let counts = self.match_counts_by_restaurant(&query.ingredients);

        // `counts` iterates in restaurant id order; the stable sort keeps
        // that order for fully tied entries.
        let mut ranked: Vec<(RestaurantListing, usize)> = counts
            .iter()
            .filter_map(|(restaurant_id, count)| {
                self.index.restaurant(restaurant_id).map(|r| {
                    (
                        RestaurantListing {
                            id: r.id.clone(),
                            name: r.name.clone(),
                        },
                        *count,
                    )
                })
            })
            .collect();
        ranked.sort_by_cached_key(|(listing, count)| RankKey::by_matches(*count, &listing.name));

        paginate(
            ranked.into_iter().map(|(listing, _)| listing).collect(),
            query.offset,
            query.effective_limit(),
        )
    }

    /// Fetch one restaurant with its complete menu. `None` for an unknown
    /// id; callers render that as a not-available state.
    pub fn get_restaurant(&self, id: &str) -> Option<RestaurantDetail> {
        debug!("Get restaurant: {}", id);

        let restaurant = self.index.restaurant(id)?;
        let menu = self.index.menu(id).into_iter().cloned().collect();

        Some(RestaurantDetail {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            desc: restaurant.desc.clone(),
            menu,
        })
    }

    /// List recipes matching the ingredient filter.
    ///
    /// Recipes rank by their owning restaurant's aggregate match count and
    /// that restaurant's name — never by their own title. With an empty
    /// filter every recipe matches, so restaurants rank by total menu size.
    pub fn list_recipes(&self, query: &ListingQuery) -> Vec<RecipeListing> {
        debug!("List recipes: {:?}", query);

        let matched = matching_recipe_ids(&self.index, &query.ingredients);

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for recipe in matched.iter().filter_map(|id| self.index.recipe(id)) {
            *counts.entry(recipe.restaurant_id.as_str()).or_default() += 1;
        }

        // Matched ids iterate in recipe id order; recipes of fully tied
        // restaurants keep that order under the stable sort.
        let mut ranked: Vec<&Recipe> = matched
            .iter()
            .filter_map(|id| self.index.recipe(id))
            .collect();
        ranked.sort_by_cached_key(|recipe| {
            let count = counts.get(recipe.restaurant_id.as_str()).copied().unwrap_or(0);
            let name = self
                .index
                .restaurant(&recipe.restaurant_id)
                .map(|r| r.name.as_str())
                .unwrap_or("");
            RankKey::by_matches(count, name)
        });

        let listings = ranked
            .into_iter()
            .map(|recipe| RecipeListing {
                id: recipe.id.clone(),
                name: recipe.title.clone(),
                restaurant_id: recipe.restaurant_id.clone(),
            })
            .collect();

        paginate(listings, query.offset, query.effective_limit())
    }

    /// Corpus-wide counts
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            total_restaurants: self.index.restaurant_count(),
            total_recipes: self.index.recipe_count(),
            total_ingredients: self.index.ingredient_count(),
        }
    }

    fn match_counts_by_restaurant(&self, ingredients: &[String]) -> BTreeMap<String, usize> {
        let matched = matching_recipe_ids(&self.index, ingredients);
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for recipe in matched.iter().filter_map(|id| self.index.recipe(id)) {
            *counts.entry(recipe.restaurant_id.clone()).or_default() += 1;
        }
        counts
    }
}

fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}
