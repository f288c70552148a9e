use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use std::time::Duration;
use validator::Validate;
use weekplate_shared::{
    not_blank,
    recipe::{Recipe, RecipeSummary},
};

use crate::{
    CatalogError, CatalogResult,
    record::{CategoriesEnvelope, MealRecord, MealsEnvelope, SummaryRecord},
};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
const USER_AGENT: &str = concat!("weekplate/", env!("CARGO_PKG_VERSION"));

#[derive(Validate, Clone, Debug, Default)]
pub struct SearchInput {
    #[validate(custom(function = "not_blank"))]
    pub query: String,
    /// Restrict results to one catalog category.
    pub category: Option<String>,
}

/// Read-only client for the recipe catalog.
///
/// Requests are never retried. An empty result set (`{"meals": null}`) is a valid answer
/// and comes back as an empty list or `None`.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// Searches by name, or by name within a category when one is given.
    pub async fn search(&self, input: &SearchInput) -> CatalogResult<Vec<Recipe>> {
        input.validate()?;

        let query = input.query.trim();
        match input.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => {
                self.search_in_category(query, category).await
            }
            _ => self.search_by_name(query).await,
        }
    }

    pub async fn search_by_name(&self, query: &str) -> CatalogResult<Vec<Recipe>> {
        let envelope: MealsEnvelope<MealRecord> =
            self.fetch("search.php", &[("s", query)]).await?;

        Ok(envelope.into_vec().into_iter().map(Recipe::from).collect())
    }

    /// Category listing. Records are partial and must go through [`Self::lookup`] before
    /// their ingredients can be used.
    pub async fn filter_by_category(&self, category: &str) -> CatalogResult<Vec<RecipeSummary>> {
        let envelope: MealsEnvelope<SummaryRecord> =
            self.fetch("filter.php", &[("c", category)]).await?;

        Ok(envelope
            .into_vec()
            .into_iter()
            .map(RecipeSummary::from)
            .collect())
    }

    /// Resolves every recipe of `category` and keeps those whose name contains `query`,
    /// ignoring case.
    pub async fn search_in_category(
        &self,
        query: &str,
        category: &str,
    ) -> CatalogResult<Vec<Recipe>> {
        let summaries = self.filter_by_category(category).await?;
        let resolved = try_join_all(summaries.iter().map(|s| self.lookup(&s.id))).await?;

        let needle = query.to_lowercase();
        Ok(resolved
            .into_iter()
            .flatten()
            .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
            .collect())
    }

    pub async fn lookup(&self, id: &str) -> CatalogResult<Option<Recipe>> {
        let envelope: MealsEnvelope<MealRecord> = self.fetch("lookup.php", &[("i", id)]).await?;

        Ok(envelope.into_vec().into_iter().next().map(Recipe::from))
    }

    pub async fn random(&self) -> CatalogResult<Option<Recipe>> {
        let envelope: MealsEnvelope<MealRecord> = self.fetch("random.php", &[]).await?;

        Ok(envelope.into_vec().into_iter().next().map(Recipe::from))
    }

    /// Issues `count` sequential random requests and keeps the records returned.
    pub async fn random_batch(&self, count: usize) -> CatalogResult<Vec<Recipe>> {
        let mut recipes = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(recipe) = self.random().await? {
                recipes.push(recipe);
            }
        }

        Ok(recipes)
    }

    pub async fn categories(&self) -> CatalogResult<Vec<String>> {
        let envelope: CategoriesEnvelope = self.fetch("categories.php", &[]).await?;

        Ok(envelope
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(|c| c.name)
            .collect())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> CatalogResult<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(url = %url, ?query, "querying recipe catalog");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "recipe catalog error");
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
