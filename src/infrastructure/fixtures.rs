//! Built-in sample data source for offline use and demos.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use tracing::debug;

use crate::application::services::ProductFilter;
use crate::domain::entities::{
    AiSuggestion, Category, CategoryChartPoint, Competitor, DashboardMetrics, GrowthMetrics,
    MarketTrends, NewProduct, Product, ProductId, ProductStatus, RegionalShare, TimelinePoint,
    TrendingIngredient, WizardForm,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{FlavorDataPort, ProductQuery, ProductSort, TrendsQuery};

const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// In-memory [`FlavorDataPort`] serving the sample catalogue.
#[derive(Clone)]
pub struct MockDataSource {
    products: Arc<RwLock<Vec<Product>>>,
    next_id: Arc<AtomicU64>,
    latency: Duration,
    failing: Arc<AtomicBool>,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl MockDataSource {
    /// Creates a source seeded with the sample products, sleeping `latency` per request.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        let products = sample_products();
        let next_id = products.len() as u64 + 1;
        Self {
            products: Arc::new(RwLock::new(products)),
            next_id: Arc::new(AtomicU64::new(next_id)),
            latency,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes every subsequent request fail with a 503.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored products.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.read().len()
    }

    async fn respond(&self, endpoint: &str) -> Result<(), ApiError> {
        debug!(endpoint, latency_ms = self.latency.as_millis(), "Serving sample data");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::status(503, "sample data source is offline"));
        }
        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn sample_products() -> Vec<Product> {
    [
        ("1", "Spiced Turmeric Latte", Category::Beverages, 87, ProductStatus::Active, date(2024, 1, 15)),
        ("2", "Coconut Quinoa Bites", Category::Snacks, 82, ProductStatus::Testing, date(2024, 1, 12)),
        ("3", "Green Tea Yogurt", Category::Dairy, 79, ProductStatus::Active, date(2024, 1, 10)),
        ("4", "Maple Pecan Granola", Category::Cereals, 74, ProductStatus::Active, date(2024, 1, 8)),
        ("5", "Chili Dark Chocolate", Category::Confectionery, 71, ProductStatus::Testing, date(2024, 1, 5)),
        ("6", "Mango Lassi Pops", Category::FrozenFoods, 68, ProductStatus::Testing, date(2024, 1, 3)),
    ]
    .into_iter()
    .map(|(id, name, category, score, status, created)| {
        Product::new(ProductId::new(id), name, category, score, status, created)
    })
    .collect()
}

fn sample_metrics(total_products: usize) -> DashboardMetrics {
    DashboardMetrics {
        total_products: total_products as u64,
        success_rate: 78.5,
        active_users: 1_240,
        trending_categories: 4,
        growth: GrowthMetrics {
            products_growth: 12.0,
            success_rate_growth: 3.2,
            users_growth: 8.7,
        },
        chart_data: [
            ("Jan", 12, 8, 6),
            ("Feb", 15, 10, 7),
            ("Mar", 18, 11, 9),
            ("Apr", 22, 14, 10),
        ]
        .into_iter()
        .map(|(month, beverages, snacks, dairy)| CategoryChartPoint {
            month: month.to_string(),
            beverages,
            snacks,
            dairy,
        })
        .collect(),
    }
}

fn sample_trends() -> MarketTrends {
    MarketTrends {
        trending_ingredients: [
            ("Turmeric", 92, "+15%"),
            ("Oat Milk", 88, "+12%"),
            ("Yuzu", 81, "+9%"),
            ("Activated Charcoal", 54, "-4%"),
        ]
        .into_iter()
        .map(|(name, score, growth)| TrendingIngredient {
            name: name.to_string(),
            score,
            growth: growth.to_string(),
        })
        .collect(),
        regional_data: [
            ("North America", 35.0),
            ("Europe", 28.0),
            ("Asia Pacific", 25.0),
            ("Latin America", 12.0),
        ]
        .into_iter()
        .map(|(name, percentage)| RegionalShare {
            name: name.to_string(),
            percentage,
        })
        .collect(),
        timeline_data: [
            ("Jan", 65.0, 45.0, 30.0, 40.0),
            ("Feb", 68.0, 48.0, 35.0, 42.0),
            ("Mar", 72.0, 50.0, 41.0, 47.0),
            ("Apr", 75.0, 53.0, 46.0, 51.0),
        ]
        .into_iter()
        .map(|(month, healthy, organic, plant_based, functional)| TimelinePoint {
            month: month.to_string(),
            healthy,
            organic,
            plant_based,
            functional,
        })
        .collect(),
    }
}

fn sample_competitors() -> Vec<(Category, Competitor)> {
    [
        (Category::Beverages, "Nestle", 142, 84.0, "+6%"),
        (Category::Snacks, "PepsiCo", 118, 81.5, "+4%"),
        (Category::Dairy, "Danone", 96, 79.0, "-2%"),
        (Category::Confectionery, "Mondelez", 87, 77.5, "+3%"),
        (Category::Cereals, "General Mills", 74, 75.0, "-1%"),
    ]
    .into_iter()
    .map(|(category, company, products, score, trend)| {
        (
            category,
            Competitor {
                company: company.to_string(),
                products,
                score,
                trend: trend.to_string(),
            },
        )
    })
    .collect()
}

const fn product_nouns(category: Category) -> [&'static str; 3] {
    match category {
        Category::Beverages => ["Fizz", "Cold Brew", "Smoothie"],
        Category::Snacks => ["Crisps", "Bites", "Bar"],
        Category::Dairy => ["Yogurt", "Kefir", "Cheese Spread"],
        Category::Cereals => ["Granola", "Clusters", "Porridge"],
        Category::Confectionery => ["Truffles", "Chews", "Brittle"],
        Category::FrozenFoods => ["Sorbet", "Pops", "Gelato"],
    }
}

/// Deterministic concepts derived from the form's category and flavors.
fn suggestions_for(form: &WizardForm) -> Result<Vec<AiSuggestion>, ApiError> {
    let Some(category) = form.category else {
        return Err(ApiError::status(422, "category is required"));
    };
    if form.flavors.is_empty() {
        return Err(ApiError::status(422, "at least one flavor is required"));
    }

    let flavors: Vec<_> = form.flavors.iter().collect();
    let audience = match (form.age_group, form.region) {
        (Some(age), Some(region)) => format!("{age} year olds in {region}"),
        _ => "a broad audience".to_string(),
    };

    Ok(product_nouns(category)
        .iter()
        .enumerate()
        .map(|(i, noun)| {
            let flavor = flavors[i % flavors.len()];
            let bonus = u8::try_from(flavors.len().min(3)).unwrap_or(3);
            let score = 88 - 6 * u8::try_from(i).unwrap_or(0) + bonus;
            AiSuggestion::new(
                format!("{flavor} {noun}"),
                score,
                format!(
                    "A {} take on {} aimed at {audience}.",
                    flavor.label().to_lowercase(),
                    category.label().to_lowercase()
                ),
            )
        })
        .collect())
}

fn sort_products(products: &mut [Product], sort: ProductSort) {
    match sort {
        ProductSort::Name => products.sort_by(|a, b| a.name().cmp(b.name())),
        ProductSort::Score => products.sort_by(|a, b| b.score().cmp(&a.score())),
        ProductSort::Created => products.sort_by(|a, b| b.created().cmp(&a.created())),
    }
}

#[async_trait]
impl FlavorDataPort for MockDataSource {
    async fn fetch_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        self.respond("dashboard").await?;
        Ok(sample_metrics(self.product_count()))
    }

    async fn fetch_products(&self, query: ProductQuery) -> Result<Vec<Product>, ApiError> {
        self.respond("products").await?;

        let filter = ProductFilter::new(query.search.as_deref().unwrap_or_default(), query.category);
        let mut matching: Vec<Product> = filter
            .apply(&self.products.read())
            .into_iter()
            .cloned()
            .collect();
        sort_products(&mut matching, query.sort_by);

        let limit = query.limit.max(1) as usize;
        let offset = (query.page.max(1) as usize - 1) * limit;
        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ApiError> {
        self.respond("create").await?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Product::new(
            ProductId::new(id.to_string()),
            product.name,
            product.category,
            product.score,
            product.status,
            product.created,
        );
        self.products.write().push(stored.clone());
        Ok(stored)
    }

    async fn fetch_market_trends(&self, query: TrendsQuery) -> Result<MarketTrends, ApiError> {
        self.respond("trends").await?;

        let mut trends = sample_trends();
        if let Some(region) = query.region {
            trends.regional_data.retain(|r| r.name == region.label());
        }
        Ok(trends)
    }

    async fn fetch_competitors(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Competitor>, ApiError> {
        self.respond("competitors").await?;

        Ok(sample_competitors()
            .into_iter()
            .filter(|(c, _)| category.is_none_or(|wanted| *c == wanted))
            .map(|(_, competitor)| competitor)
            .collect())
    }

    async fn fetch_ai_suggestions(
        &self,
        form: &WizardForm,
    ) -> Result<Vec<AiSuggestion>, ApiError> {
        self.respond("suggestions").await?;
        suggestions_for(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AgeGroup, Flavor, Region};
    use tokio_test::{assert_pending, assert_ready, task};

    fn instant() -> MockDataSource {
        MockDataSource::new(Duration::ZERO)
    }

    fn form(category: Category, flavors: &[Flavor]) -> WizardForm {
        WizardForm {
            category: Some(category),
            age_group: Some(AgeGroup::From18To25),
            region: Some(Region::Europe),
            flavors: flavors.iter().copied().collect(),
        }
    }

    #[tokio::test]
    async fn test_products_filter_and_page() {
        let source = instant();

        let lattes = source
            .fetch_products(ProductQuery::default().with_search("LATTE"))
            .await
            .unwrap();
        assert_eq!(lattes.len(), 1);
        assert_eq!(lattes[0].name(), "Spiced Turmeric Latte");

        let page = source
            .fetch_products(ProductQuery::default().with_limit(4).with_page(2))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
    }

    #[tokio::test]
    async fn test_products_sorted_by_score() {
        let source = instant();
        let products = source
            .fetch_products(ProductQuery::default().sorted_by(ProductSort::Score))
            .await
            .unwrap();
        let scores: Vec<_> = products.iter().map(Product::score).collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[tokio::test]
    async fn test_create_product_appends() {
        let source = instant();
        let before = source.product_count();
        let new = NewProduct {
            name: "Tropical Fizz".to_string(),
            category: Category::Beverages,
            score: 90,
            status: ProductStatus::Testing,
            created: date(2026, 10, 17),
        };

        let stored = source.create_product(new).await.unwrap();

        assert_eq!(source.product_count(), before + 1);
        assert_eq!(stored.id().as_str(), (before + 1).to_string());
        assert_eq!(stored.status(), ProductStatus::Testing);
    }

    #[tokio::test]
    async fn test_suggestions_are_deterministic() {
        let source = instant();
        let form = form(Category::Beverages, &[Flavor::Sweet, Flavor::Fruity]);

        let first = source.fetch_ai_suggestions(&form).await.unwrap();
        let second = source.fetch_ai_suggestions(&form).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].name, "Sweet Fizz");
        assert_eq!(first[1].name, "Fruity Cold Brew");
        assert!(first.iter().all(|s| s.score <= 100));
    }

    #[tokio::test]
    async fn test_suggestions_require_category() {
        let source = instant();
        let err = source
            .fetch_ai_suggestions(&WizardForm::default())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::status(422, "category is required"));
    }

    #[tokio::test]
    async fn test_competitors_filtered_by_category() {
        let source = instant();
        let all = source.fetch_competitors(None).await.unwrap();
        let dairy = source.fetch_competitors(Some(Category::Dairy)).await.unwrap();

        assert_eq!(all.len(), 5);
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].company, "Danone");
    }

    #[tokio::test]
    async fn test_failure_switch() {
        let source = instant();
        source.set_failing(true);

        assert!(source.fetch_dashboard_metrics().await.is_err());
        assert!(source.fetch_market_trends(TrendsQuery::default()).await.is_err());

        source.set_failing(false);
        let metrics = source.fetch_dashboard_metrics().await.unwrap();
        assert_eq!(metrics.total_products, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let source = MockDataSource::new(Duration::from_millis(300));
        let mut fetch = task::spawn(source.fetch_dashboard_metrics());

        assert_pending!(fetch.poll());
        tokio::time::advance(Duration::from_millis(301)).await;
        let metrics = assert_ready!(fetch.poll());
        assert!(metrics.is_ok());
    }
}
