//! HTTP adapter for the FlavorForge backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::ErrorResponse;
use crate::domain::entities::{
    AiSuggestion, Category, Competitor, DashboardMetrics, MarketTrends, NewProduct, Product,
    WizardForm,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{FlavorDataPort, ProductQuery, TrendsQuery};

const USER_AGENT: &str = concat!("flavorforge/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend client implementing [`FlavorDataPort`] over JSON/HTTP.
pub struct FlavorForgeClient {
    client: Client,
    base_url: String,
}

impl FlavorForgeClient {
    /// Creates a client with the default 30 second timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the service base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach FlavorForge API");
            if e.is_timeout() {
                ApiError::network("request timed out")
            } else if e.is_connect() {
                ApiError::network("failed to connect to FlavorForge API")
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse response");
            ApiError::decode(e.to_string())
        })
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> ApiError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.detail,
            Err(_) => format!("HTTP {status}"),
        };
        warn!(status = status.as_u16(), %message, "FlavorForge API returned an error");
        ApiError::status(status.as_u16(), message)
    }
}

fn product_params(query: &ProductQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
        ("sortBy", query.sort_by.as_query().to_string()),
    ];
    if let Some(category) = query.category {
        params.push(("category", category.label().to_string()));
    }
    if let Some(search) = &query.search {
        params.push(("search", search.clone()));
    }
    params
}

fn trends_params(query: TrendsQuery) -> Vec<(&'static str, &'static str)> {
    let mut params = Vec::new();
    if let Some(region) = query.region {
        params.push(("region", region.label()));
    }
    if let Some(category) = query.category {
        params.push(("category", category.label()));
    }
    params
}

#[async_trait]
impl FlavorDataPort for FlavorForgeClient {
    async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        debug!("GET /dashboard/");
        self.send(self.client.get(self.url("/dashboard/"))).await
    }

    async fn fetch_products(&self, query: ProductQuery) -> Result<Vec<Product>, ApiError> {
        debug!(page = query.page, limit = query.limit, "GET /products");
        let request = self
            .client
            .get(self.url("/products"))
            .query(&product_params(&query));
        self.send(request).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
        debug!(name = %product.name, "POST /products");
        self.send(self.client.post(self.url("/products")).json(&product))
            .await
    }

    async fn fetch_market_trends(&self, query: TrendsQuery) -> Result<MarketTrends, ApiError> {
        debug!(?query, "GET /trends");
        let request = self
            .client
            .get(self.url("/trends"))
            .query(&trends_params(query));
        self.send(request).await
    }

    async fn fetch_competitors(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Competitor>, ApiError> {
        debug!(?category, "GET /competitors");
        let mut request = self.client.get(self.url("/competitors"));
        if let Some(category) = category {
            request = request.query(&[("category", category.label())]);
        }
        self.send(request).await
    }

    async fn fetch_ai_suggestions(
        &self,
        form: &WizardForm,
    ) -> Result<Vec<AiSuggestion>, ApiError> {
        debug!(?form, "POST /ai-suggestions");
        self.send(self.client.post(self.url("/ai-suggestions")).json(form))
            .await
    }
}
