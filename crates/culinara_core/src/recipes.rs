use std::sync::Arc;

use culinara_api::{Recipe, RecipeApi};

use crate::storage::{self, PersistOutcome, Storage, FAVORITES_KEY};

/// Synthetic first entry of the category list; selecting it maps to an
/// unfiltered search rather than a second request path.
pub const ALL_CATEGORY: &str = "All";

/// Search results, category list, and the favorite id set. Results are
/// replaced wholesale per query; favorites persist independently and are
/// rehydrated at construction.
pub struct RecipeStore {
    api: Arc<dyn RecipeApi>,
    storage: Arc<dyn Storage>,
    recipes: Vec<Recipe>,
    categories: Vec<String>,
    favorites: Vec<String>,
    loading: bool,
    selected_category: String,
    search_query: String,
}

impl RecipeStore {
    pub fn new(api: Arc<dyn RecipeApi>, storage: Arc<dyn Storage>) -> Self {
        let favorites: Vec<String> = storage::load_or_default(storage.as_ref(), FAVORITES_KEY);
        Self {
            api,
            storage,
            recipes: Vec::new(),
            categories: Vec::new(),
            favorites,
            loading: false,
            selected_category: ALL_CATEGORY.to_string(),
            search_query: String::new(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == id)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Refreshes the category list, keeping `"All"` as its first entry. A
    /// failed fetch leaves the current list untouched.
    pub async fn fetch_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(names) => {
                let mut categories = Vec::with_capacity(names.len() + 1);
                categories.push(ALL_CATEGORY.to_string());
                categories.extend(names);
                self.categories = categories;
            }
            Err(err) => log::warn!("Category fetch failed: {err}"),
        }
    }

    pub async fn search_recipes(&mut self, query: &str) {
        self.loading = true;
        self.search_query = query.to_string();
        match self.api.search(query).await {
            Ok(recipes) => self.recipes = recipes,
            Err(err) => log::warn!("Recipe search for {query:?} failed: {err}"),
        }
        // Cleared whether the call succeeded or not.
        self.loading = false;
    }

    pub async fn fetch_by_category(&mut self, category: &str) {
        if category == ALL_CATEGORY {
            return self.search_recipes("").await;
        }

        self.loading = true;
        self.selected_category = category.to_string();
        match self.api.filter_by_category(category).await {
            Ok(recipes) => self.recipes = recipes,
            Err(err) => log::warn!("Category filter for {category:?} failed: {err}"),
        }
        self.loading = false;
    }

    /// Flips membership of `id` in the favorites set and persists the
    /// resulting list immediately.
    pub fn toggle_favorite(&mut self, id: &str) -> PersistOutcome {
        if let Some(pos) = self.favorites.iter().position(|fav| fav == id) {
            self.favorites.remove(pos);
        } else {
            self.favorites.push(id.to_string());
        }
        storage::save_json(self.storage.as_ref(), FAVORITES_KEY, &self.favorites)
    }
}
