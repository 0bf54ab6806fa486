//! Data access port for products, metrics and market intelligence.

use async_trait::async_trait;

use crate::domain::entities::{
    AiSuggestion, Category, Competitor, DashboardMetrics, MarketTrends, NewProduct, Product,
    Region, WizardForm,
};
use crate::domain::errors::ApiError;

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Alphabetical.
    #[default]
    Name,
    /// Highest score first.
    Score,
    /// Newest first.
    Created,
}

impl ProductSort {
    /// Value of the `sortBy` query parameter.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Score => "score",
            Self::Created => "created",
        }
    }
}

/// Options for listing products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// One-based page number.
    pub page: u32,
    /// Page size, at least one.
    pub limit: u32,
    /// Restricts results to one category.
    pub category: Option<Category>,
    /// Case-insensitive name filter; `None` when empty.
    pub search: Option<String>,
    /// Sort order.
    pub sort_by: ProductSort,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            category: None,
            search: None,
            sort_by: ProductSort::Name,
        }
    }
}

impl ProductQuery {
    /// Sets the page size. Zero is raised to one.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = if limit == 0 { 1 } else { limit };
        self
    }

    /// Sets the page. Zero is raised to one.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = if page == 0 { 1 } else { page };
        self
    }

    /// Filters to one category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filters by name. An empty string clears the filter.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.is_empty() { None } else { Some(search) };
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sorted_by(mut self, sort_by: ProductSort) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// Options for the market trend report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrendsQuery {
    /// Restricts the report to one region.
    pub region: Option<Region>,
    /// Restricts the report to one category.
    pub category: Option<Category>,
}

/// Port for the FlavorForge data service.
#[async_trait]
pub trait FlavorDataPort: Send + Sync {
    /// Fetches the dashboard headline metrics.
    async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError>;

    /// Fetches products in service order.
    async fn fetch_products(&self, query: ProductQuery) -> Result<Vec<Product>, ApiError>;

    /// Persists a new product and returns the stored record.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError>;

    /// Fetches trending ingredients, regional shares and the trend timeline.
    async fn fetch_market_trends(&self, query: TrendsQuery) -> Result<MarketTrends, ApiError>;

    /// Fetches competitor summaries.
    async fn fetch_competitors(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Competitor>, ApiError>;

    /// Generates product concepts for a completed wizard form.
    async fn fetch_ai_suggestions(&self, form: &WizardForm)
    -> Result<Vec<AiSuggestion>, ApiError>;
}

#[cfg(test)]
#[allow(missing_docs)]
pub mod mock {
    use super::*;
    use crate::domain::entities::{
        GrowthMetrics, ProductId, ProductStatus, TrendingIngredient,
    };
    use chrono::NaiveDate;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Scriptable data port for tests.
    #[derive(Default)]
    pub struct MockFlavorData {
        pub products: Vec<Product>,
        pub suggestions: Vec<AiSuggestion>,
        pub fail_metrics: AtomicBool,
        pub fail_products: AtomicBool,
        pub fail_trends: AtomicBool,
        pub fail_competitors: AtomicBool,
        pub fail_suggestions: AtomicBool,
        pub calls: Mutex<Vec<&'static str>>,
    }

    impl MockFlavorData {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_products(mut self, products: Vec<Product>) -> Self {
            self.products = products;
            self
        }

        pub fn with_suggestions(mut self, suggestions: Vec<AiSuggestion>) -> Self {
            self.suggestions = suggestions;
            self
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn check(flag: &AtomicBool) -> Result<(), ApiError> {
            if flag.load(Ordering::SeqCst) {
                Err(ApiError::status(500, "mock failure"))
            } else {
                Ok(())
            }
        }
    }

    pub fn product(id: &str, name: &str, category: Category) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            category,
            80,
            ProductStatus::Active,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[async_trait]
    impl FlavorDataPort for MockFlavorData {
        async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
            self.record("metrics");
            Self::check(&self.fail_metrics)?;
            Ok(DashboardMetrics {
                total_products: self.products.len() as u64,
                success_rate: 73.5,
                active_users: 8934,
                trending_categories: 12,
                growth: GrowthMetrics::default(),
                chart_data: Vec::new(),
            })
        }

        async fn fetch_products(&self, _query: ProductQuery) -> Result<Vec<Product>, ApiError> {
            self.record("products");
            Self::check(&self.fail_products)?;
            Ok(self.products.clone())
        }

        async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
            self.record("create");
            Ok(Product::new(
                ProductId::new("created"),
                product.name,
                product.category,
                product.score,
                product.status,
                product.created,
            ))
        }

        async fn fetch_market_trends(&self, _query: TrendsQuery) -> Result<MarketTrends, ApiError> {
            self.record("trends");
            Self::check(&self.fail_trends)?;
            Ok(MarketTrends {
                trending_ingredients: vec![TrendingIngredient {
                    name: "Turmeric".to_string(),
                    score: 92,
                    growth: "+15%".to_string(),
                }],
                ..MarketTrends::default()
            })
        }

        async fn fetch_competitors(
            &self,
            _category: Option<Category>,
        ) -> Result<Vec<Competitor>, ApiError> {
            self.record("competitors");
            Self::check(&self.fail_competitors)?;
            Ok(vec![Competitor {
                company: "Nestle".to_string(),
                products: 45,
                score: 78.0,
                trend: "+5%".to_string(),
            }])
        }

        async fn fetch_ai_suggestions(
            &self,
            _form: &WizardForm,
        ) -> Result<Vec<AiSuggestion>, ApiError> {
            self.record("suggestions");
            Self::check(&self.fail_suggestions)?;
            Ok(self.suggestions.clone())
        }
    }
}
