pub mod actions;

// Re-exports
pub use actions::{fetch_recipe_listings, fetch_restaurant, fetch_restaurant_listings};

use crate::corpus::Recipe;
use crate::query::{RestaurantDetail, RestaurantListing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// UI-side cache state: restaurants indexed by id. Snapshots are immutable;
/// `reduce` returns a new state and never touches its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub restaurants_cache: BTreeMap<String, CachedRestaurant>,
}

/// A cached restaurant record. A listing caches with `desc` and `menu`
/// absent until the restaurant is fully fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRestaurant {
    pub id: String,
    pub name: String,
    pub desc: Option<String>,
    pub menu: Option<Vec<Recipe>>,
}

impl From<&RestaurantListing> for CachedRestaurant {
    fn from(listing: &RestaurantListing) -> Self {
        CachedRestaurant {
            id: listing.id.clone(),
            name: listing.name.clone(),
            desc: None,
            menu: None,
        }
    }
}

impl From<&RestaurantDetail> for CachedRestaurant {
    fn from(detail: &RestaurantDetail) -> Self {
        CachedRestaurant {
            id: detail.id.clone(),
            name: detail.name.clone(),
            desc: Some(detail.desc.clone()),
            menu: Some(detail.menu.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    CacheRestaurants(Vec<CachedRestaurant>),
}

/// Pure state transition. Within one batch the first record per id wins;
/// against the existing cache an incoming record replaces the cached one
/// wholesale (shallow merge, no field-level combining).
pub fn reduce(state: &State, action: Action) -> State {
    match action {
        Action::CacheRestaurants(restaurants) => {
            let mut to_merge: BTreeMap<String, CachedRestaurant> = BTreeMap::new();
            for restaurant in restaurants {
                to_merge.entry(restaurant.id.clone()).or_insert(restaurant);
            }

            let mut restaurants_cache = state.restaurants_cache.clone();
            restaurants_cache.extend(to_merge);

            State { restaurants_cache }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cached(id: &str, name: &str) -> CachedRestaurant {
        CachedRestaurant {
            id: id.to_string(),
            name: name.to_string(),
            desc: None,
            menu: None,
        }
    }

    #[test]
    fn test_caches_by_id() {
        let state = State::default();
        let next = reduce(
            &state,
            Action::CacheRestaurants(vec![cached("r1", "Alpha"), cached("r2", "Beta")]),
        );

        assert_eq!(next.restaurants_cache.len(), 2);
        assert_eq!(next.restaurants_cache["r1"].name, "Alpha");
        // The input snapshot is untouched.
        assert!(state.restaurants_cache.is_empty());
    }

    #[test]
    fn test_first_record_wins_within_a_batch() {
        let next = reduce(
            &State::default(),
            Action::CacheRestaurants(vec![cached("r1", "First"), cached("r1", "Second")]),
        );
        assert_eq!(next.restaurants_cache["r1"].name, "First");
    }

    #[test]
    fn test_later_dispatch_replaces_wholesale() {
        let full = CachedRestaurant {
            id: "r1".to_string(),
            name: "Alpha".to_string(),
            desc: Some("About Alpha.".to_string()),
            menu: Some(Vec::new()),
        };

        let state = reduce(&State::default(), Action::CacheRestaurants(vec![full]));
        let next = reduce(&state, Action::CacheRestaurants(vec![cached("r1", "Alpha")]));

        // A bare listing replaces the fully fetched record; nothing is
        // merged field by field.
        assert_eq!(next.restaurants_cache["r1"].desc, None);
        assert_eq!(next.restaurants_cache["r1"].menu, None);
    }
}
