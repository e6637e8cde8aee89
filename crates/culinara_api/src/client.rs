use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::types::{CategoryRow, MealsEnvelope};
use crate::{ApiError, Recipe};

/// Default public endpoint; overridable via `CULINARA_API_BASE`.
const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientSettings {
    /// Settings with the base URL taken from the environment when set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(base) = std::env::var("CULINARA_API_BASE") {
            if !base.trim().is_empty() {
                settings.base_url = base.trim().trim_end_matches('/').to_string();
            }
        }
        settings
    }
}

/// Seam for the remote recipe API so stores can be exercised without a
/// network.
#[async_trait::async_trait]
pub trait RecipeApi: Send + Sync {
    /// All known category names, in API order.
    async fn list_categories(&self) -> Result<Vec<String>, ApiError>;
    /// Full-text recipe search; an empty query returns the API's default set.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ApiError>;
    /// Partial recipe records belonging to one category.
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url,
        })
    }

    async fn get_meals<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let parsed = reqwest::Url::parse(&url)
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .query(query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let envelope: MealsEnvelope<T> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        // `meals: null` is the API's spelling of "no results".
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let rows: Vec<CategoryRow> = self.get_meals("list.php", &[("c", "list")]).await?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        self.get_meals("search.php", &[("s", query)]).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, ApiError> {
        self.get_meals("filter.php", &[("c", category)]).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
