//! Data assembled for the read-only screens.

use crate::domain::entities::{Competitor, DashboardMetrics, MarketTrends, Product};

/// Number of products listed under "Recent Activity".
pub const RECENT_PRODUCTS: usize = 3;

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Headline metrics and chart series.
    pub metrics: DashboardMetrics,
    /// Most recent products, at most [`RECENT_PRODUCTS`].
    pub recent_products: Vec<Product>,
}

impl DashboardView {
    /// Keeps only the first [`RECENT_PRODUCTS`] products.
    #[must_use]
    pub fn new(metrics: DashboardMetrics, mut products: Vec<Product>) -> Self {
        products.truncate(RECENT_PRODUCTS);
        Self {
            metrics,
            recent_products: products,
        }
    }
}

/// Everything the market-intelligence screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketView {
    /// Ingredients, regional shares and timeline.
    pub trends: MarketTrends,
    /// Competitor summaries.
    pub competitors: Vec<Competitor>,
}
