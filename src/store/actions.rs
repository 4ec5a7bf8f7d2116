use crate::query::{ListingQuery, QueryEngine, RecipeListing, RestaurantDetail, RestaurantListing};
use crate::store::{reduce, Action, CachedRestaurant, State};

/// Query restaurant listings and fold them into the cache.
pub fn fetch_restaurant_listings(
    engine: &QueryEngine,
    query: &ListingQuery,
    state: &State,
) -> (State, Vec<RestaurantListing>) {
    let listings = engine.list_restaurants(query);
    let cached: Vec<CachedRestaurant> = listings.iter().map(CachedRestaurant::from).collect();
    let next = reduce(state, Action::CacheRestaurants(cached));
    (next, listings)
}

/// Fetch a full restaurant and fold it into the cache. An unknown id leaves
/// the state unchanged.
pub fn fetch_restaurant(
    engine: &QueryEngine,
    id: &str,
    state: &State,
) -> (State, Option<RestaurantDetail>) {
    match engine.get_restaurant(id) {
        Some(detail) => {
            let next = reduce(
                state,
                Action::CacheRestaurants(vec![CachedRestaurant::from(&detail)]),
            );
            (next, Some(detail))
        }
        None => (state.clone(), None),
    }
}

/// Query recipe listings. Recipes are not cached per restaurant, so the
/// state passes through unchanged.
pub fn fetch_recipe_listings(
    engine: &QueryEngine,
    query: &ListingQuery,
    state: &State,
) -> (State, Vec<RecipeListing>) {
    (state.clone(), engine.list_recipes(query))
}
