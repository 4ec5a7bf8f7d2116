pub mod engine;
pub mod index;
pub mod matcher;
pub mod rank;

// Re-exports
pub use engine::{
    CorpusStats, ListingQuery, QueryEngine, RecipeListing, RestaurantDetail, RestaurantListing,
    DEFAULT_LIMIT,
};
pub use index::CorpusIndex;
pub use matcher::matching_recipe_ids;
pub use rank::RankKey;
