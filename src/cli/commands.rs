use crate::config::Settings;
use crate::corpus::load_corpus;
use crate::error::{Error, Result};
use crate::query::{ListingQuery, QueryEngine};
use tracing::info;

/// Load the corpus named by the settings and build the query engine.
pub fn load_engine(settings: &Settings) -> Result<QueryEngine> {
    let corpus = load_corpus(
        &settings.corpus.restaurants_path,
        &settings.corpus.recipes_path,
        settings.corpus.ingredient_index_path.as_deref(),
    )?;
    Ok(QueryEngine::new(corpus))
}

/// Build a listing query from CLI arguments, applying the configured
/// default and cap for the page size.
pub fn listing_query(
    settings: &Settings,
    ingredients: Vec<String>,
    offset: usize,
    limit: Option<usize>,
) -> ListingQuery {
    let limit = limit
        .unwrap_or(settings.pagination.default_limit)
        .min(settings.pagination.max_limit);

    ListingQuery {
        ingredients,
        offset,
        limit,
    }
}

/// List restaurants matching the filter
pub fn restaurants(engine: &QueryEngine, query: &ListingQuery) -> Result<()> {
    let listings = engine.list_restaurants(query);

    if listings.is_empty() {
        println!("No restaurants found");
        return Ok(());
    }

    println!("Found {} restaurant(s):\n", listings.len());
    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} [{}]", query.offset + i + 1, listing.name, listing.id);
    }

    Ok(())
}

/// Show one restaurant with its menu
pub fn restaurant(engine: &QueryEngine, id: &str) -> Result<()> {
    let detail = engine
        .get_restaurant(id)
        .ok_or_else(|| Error::NotFound(format!("Restaurant {id} not found")))?;

    println!("{} [{}]", detail.name, detail.id);
    if !detail.desc.is_empty() {
        println!("{}", detail.desc);
    }

    println!("\nMenu ({} dishes):", detail.menu.len());
    for recipe in &detail.menu {
        let ingredients: Vec<&str> = recipe.ingredients.iter().map(String::as_str).collect();
        println!("  - {} ({})", recipe.title.trim_end(), ingredients.join(", "));
    }

    Ok(())
}

/// List recipes matching the filter
pub fn recipes(engine: &QueryEngine, query: &ListingQuery) -> Result<()> {
    let listings = engine.list_recipes(query);

    if listings.is_empty() {
        println!("No recipes found");
        return Ok(());
    }

    println!("Found {} recipe(s):\n", listings.len());
    for (i, listing) in listings.iter().enumerate() {
        println!(
            "{}. {} [{}] at restaurant {}",
            query.offset + i + 1,
            listing.name.trim_end(),
            listing.id,
            listing.restaurant_id
        );
    }

    Ok(())
}

/// Print corpus statistics
pub fn stats(engine: &QueryEngine) -> Result<()> {
    let stats = engine.stats();

    println!("Restaurants: {}", stats.total_restaurants);
    println!("Recipes:     {}", stats.total_recipes);
    println!("Ingredients: {}", stats.total_ingredients);

    Ok(())
}

/// Validate the corpus files without running a query
pub fn validate(settings: &Settings) -> Result<()> {
    let engine = load_engine(settings)?;
    let stats = engine.stats();

    info!("Corpus validation succeeded");
    println!(
        "\x1b[32m\u{2713}\x1b[0m Corpus is valid: {} restaurants, {} recipes, {} ingredient tags",
        stats.total_restaurants, stats.total_recipes, stats.total_ingredients
    );

    Ok(())
}
