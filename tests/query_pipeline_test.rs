use bistro::corpus::models::{Recipe, Restaurant};
use bistro::corpus::{load_corpus, Corpus};
use bistro::query::{ListingQuery, QueryEngine};
use std::collections::BTreeSet;
use std::io::Write;

fn restaurant(id: &str, name: &str) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        desc: format!("A detailed description of {name}."),
    }
}

fn recipe(id: &str, restaurant_id: &str, title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        title: title.to_string(),
        desc: String::new(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
    }
}

/// Fixture modeled on the browsing scenario: four restaurants with
/// overlapping ingredient usage, one restaurant with an empty menu.
fn fixture_corpus() -> Corpus {
    let restaurants = vec![
        restaurant("rest-aaron", "Aaron's Briny Shack"),
        restaurant("rest-delia", "Delia's Garden"),
        restaurant("rest-marco", "Marco's Trattoria"),
        restaurant("rest-quiet", "The Quiet Counter"),
    ];
    let recipes = vec![
        recipe("dish-01", "rest-aaron", "Mini Star-Anise Scones", &["flour", "sugar", "cream"]),
        recipe("dish-02", "rest-aaron", "Clam Chowder", &["clams", "cream", "potato", "salt"]),
        recipe("dish-03", "rest-aaron", "Salt Cod Fritters", &["cod", "salt", "flour", "egg"]),
        recipe("dish-04", "rest-delia", "Spring Pea Coulis", &["peas", "shallots", "salt"]),
        recipe("dish-05", "rest-delia", "Herbed Omelette", &["egg", "chives", "salt", "butter"]),
        recipe("dish-06", "rest-marco", "Egg Pasta", &["egg", "flour", "salt"]),
    ];
    Corpus::from_records(restaurants, recipes)
}

fn engine() -> QueryEngine {
    QueryEngine::new(fixture_corpus())
}

fn filter(tags: &[&str]) -> ListingQuery {
    ListingQuery::with_ingredients(tags.iter().copied())
}

#[test]
fn unfiltered_restaurant_listing_covers_the_corpus_alphabetically() {
    let listings = engine().list_restaurants(&ListingQuery::default());
    let names: Vec<String> = listings.into_iter().map(|l| l.name).collect();
    assert_eq!(
        names,
        vec![
            "Aaron's Briny Shack",
            "Delia's Garden",
            "Marco's Trattoria",
            "The Quiet Counter",
        ]
    );
}

#[test]
fn intersection_matches_manual_set_arithmetic() {
    let listings = engine().list_recipes(&filter(&["egg", "salt"]));
    let ids: BTreeSet<&str> = listings.iter().map(|l| l.id.as_str()).collect();

    // Recipes carrying egg: 03, 05, 06. Recipes carrying salt: 02..06.
    let expected: BTreeSet<&str> = ["dish-03", "dish-05", "dish-06"].into_iter().collect();
    assert_eq!(ids, expected);
}

#[test]
fn unknown_tag_never_falls_back_to_unfiltered() {
    let e = engine();
    assert!(e.list_recipes(&filter(&["nonexistent-tag"])).is_empty());
    assert!(e.list_restaurants(&filter(&["nonexistent-tag"])).is_empty());
}

#[test]
fn restaurants_rank_by_descending_match_count_then_name() {
    // salt: Aaron's matches dish-02 and dish-03, Delia's matches dish-04
    // and dish-05, Marco's matches dish-06 only.
    let listings = engine().list_restaurants(&filter(&["salt"]));
    let names: Vec<String> = listings.into_iter().map(|l| l.name).collect();
    assert_eq!(
        names,
        vec!["Aaron's Briny Shack", "Delia's Garden", "Marco's Trattoria"]
    );
}

#[test]
fn zero_match_restaurants_are_excluded_when_filtering() {
    let listings = engine().list_restaurants(&filter(&["clams"]));
    let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["rest-aaron"]);
}

#[test]
fn recipes_rank_by_owning_restaurant_aggregate_not_own_title() {
    // egg: Aaron's and Delia's each own one match, Marco's owns one.
    // All counts tie, so restaurant name decides: Aaron's fritters first,
    // then Delia's omelette, then Marco's pasta — even though "Egg Pasta"
    // sorts before the other titles alphabetically.
    let listings = engine().list_recipes(&filter(&["egg"]));
    let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["dish-03", "dish-05", "dish-06"]);
}

#[test]
fn pagination_slices_the_sorted_sequence() {
    let e = engine();
    let all = e.list_restaurants(&ListingQuery::default());

    let page = e.list_restaurants(&ListingQuery {
        offset: 2,
        limit: 2,
        ..ListingQuery::default()
    });
    assert_eq!(page, all[2..4].to_vec());

    let past_the_end = e.list_restaurants(&ListingQuery {
        offset: 40,
        limit: 2,
        ..ListingQuery::default()
    });
    assert!(past_the_end.is_empty());
}

#[test]
fn full_fetch_returns_exactly_the_owned_menu() {
    let detail = engine().get_restaurant("rest-delia").unwrap();
    assert_eq!(detail.name, "Delia's Garden");
    assert!(!detail.desc.is_empty());

    let menu_ids: Vec<&str> = detail.menu.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(menu_ids, vec!["dish-04", "dish-05"]);
    assert!(detail.menu.iter().all(|r| r.restaurant_id == "rest-delia"));
}

#[test]
fn full_fetch_of_an_empty_restaurant_has_an_empty_menu() {
    let detail = engine().get_restaurant("rest-quiet").unwrap();
    assert!(detail.menu.is_empty());
}

#[test]
fn unknown_restaurant_is_an_absent_result() {
    assert!(engine().get_restaurant("rest-ghost").is_none());
}

#[test]
fn repeated_queries_are_bit_identical() {
    let e = engine();
    for query in [
        ListingQuery::default(),
        filter(&["salt"]),
        filter(&["egg", "salt"]),
    ] {
        assert_eq!(e.list_restaurants(&query), e.list_restaurants(&query));
        assert_eq!(e.list_recipes(&query), e.list_recipes(&query));
    }
}

#[test]
fn permuting_the_filter_changes_nothing() {
    let e = engine();
    assert_eq!(
        e.list_restaurants(&filter(&["salt", "egg"])),
        e.list_restaurants(&filter(&["egg", "salt"]))
    );
    assert_eq!(
        e.list_recipes(&filter(&["salt", "egg"])),
        e.list_recipes(&filter(&["egg", "salt"]))
    );
}

#[test]
fn duplicated_tags_behave_as_deduplicated() {
    let e = engine();
    assert_eq!(
        e.list_recipes(&filter(&["salt", "salt"])),
        e.list_recipes(&filter(&["salt"]))
    );
}

#[test]
fn corpus_round_trips_through_json_files() {
    let dir = tempfile::tempdir().unwrap();

    let fixture = fixture_corpus();
    let restaurants_path = dir.path().join("restaurants.json");
    let recipes_path = dir.path().join("recipes.json");

    let mut file = std::fs::File::create(&restaurants_path).unwrap();
    file.write_all(serde_json::to_string(&fixture.restaurants).unwrap().as_bytes())
        .unwrap();
    let mut file = std::fs::File::create(&recipes_path).unwrap();
    file.write_all(serde_json::to_string(&fixture.recipes).unwrap().as_bytes())
        .unwrap();

    let corpus = load_corpus(&restaurants_path, &recipes_path, None).unwrap();
    let loaded = QueryEngine::new(corpus);
    let in_memory = QueryEngine::new(fixture);

    assert_eq!(
        loaded.list_restaurants(&filter(&["salt"])),
        in_memory.list_restaurants(&filter(&["salt"]))
    );
    assert_eq!(
        loaded.list_recipes(&ListingQuery::default()),
        in_memory.list_recipes(&ListingQuery::default())
    );
}
