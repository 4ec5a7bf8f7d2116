use crate::query::index::CorpusIndex;
use std::collections::BTreeSet;

/// Compute the set of recipe ids satisfying an ingredient filter.
///
/// An empty filter matches every recipe: filtering by nothing excludes
/// nothing, so the full id set is the identity element of the intersection.
/// A tag missing from the index contributes an empty set — an unknown
/// ingredient yields zero matches rather than being ignored. Duplicate tags
/// and tag order cannot change the result.
pub fn matching_recipe_ids(index: &CorpusIndex, ingredients: &[String]) -> BTreeSet<String> {
    let mut matched = index.all_recipe_ids().clone();

    for tag in ingredients {
        match index.recipe_ids_for_ingredient(tag) {
            Some(ids) => {
                matched = matched.intersection(ids).cloned().collect();
            }
            None => return BTreeSet::new(),
        }
        if matched.is_empty() {
            break;
        }
    }

    matched
}
