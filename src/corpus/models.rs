use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub restaurant_id: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    /// Ingredient tags: unordered, duplicate-free opaque strings.
    #[serde(default)]
    pub ingredients: BTreeSet<String>,
}

impl Recipe {
    pub fn has_ingredient(&self, tag: &str) -> bool {
        self.ingredients.contains(tag)
    }
}
