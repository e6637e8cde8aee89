//! Culinara API client: wire types and HTTP access to the public meal database.
mod client;
mod types;

pub use client::{ClientSettings, HttpRecipeApi, RecipeApi};
pub use types::{ApiError, Recipe};
