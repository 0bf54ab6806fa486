//! Dashboard data loading.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::DashboardView;
use crate::domain::errors::ApiError;
use crate::domain::ports::{FlavorDataPort, ProductQuery};

/// Shared error shown when the dashboard cannot be loaded.
pub const DASHBOARD_LOAD_FAILED: &str = "Failed to fetch dashboard data.";

/// Fetches metrics, then products. The first failure abandons the cycle.
#[derive(Clone)]
pub struct LoadDashboardUseCase {
    data: Arc<dyn FlavorDataPort>,
}

impl LoadDashboardUseCase {
    /// Creates the use case over a data port.
    #[must_use]
    pub const fn new(data: Arc<dyn FlavorDataPort>) -> Self {
        Self { data }
    }

    /// # Errors
    /// Returns the first collaborator error.
    pub async fn execute(&self) -> Result<DashboardView, ApiError> {
        debug!("Loading dashboard");

        let metrics = self.data.fetch_dashboard_metrics().await.map_err(|e| {
            warn!(error = %e, "Dashboard metrics request failed");
            e
        })?;
        let products = self
            .data
            .fetch_products(ProductQuery::default())
            .await
            .map_err(|e| {
                warn!(error = %e, "Dashboard products request failed");
                e
            })?;

        Ok(DashboardView::new(metrics, products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;
    use crate::domain::ports::mocks::{MockFlavorData, product};
    use std::sync::atomic::Ordering;

    fn catalog() -> Vec<crate::domain::entities::Product> {
        vec![
            product("1", "Spiced Turmeric Latte", Category::Beverages),
            product("2", "Coconut Quinoa Bites", Category::Snacks),
            product("3", "Green Tea Yogurt", Category::Dairy),
            product("4", "Maple Oat Clusters", Category::Cereals),
        ]
    }

    #[tokio::test]
    async fn test_loads_metrics_and_three_recent_products() {
        let data = Arc::new(MockFlavorData::new().with_products(catalog()));
        let use_case = LoadDashboardUseCase::new(data.clone());

        let view = use_case.execute().await.expect("dashboard loads");

        assert_eq!(view.recent_products.len(), 3);
        assert_eq!(view.recent_products[0].name(), "Spiced Turmeric Latte");
        assert_eq!(data.calls(), vec!["metrics", "products"]);
    }

    #[tokio::test]
    async fn test_metrics_failure_abandons_remaining_fetches() {
        let data = Arc::new(MockFlavorData::new().with_products(catalog()));
        data.fail_metrics.store(true, Ordering::SeqCst);
        let use_case = LoadDashboardUseCase::new(data.clone());

        let result = use_case.execute().await;

        assert!(result.is_err());
        assert_eq!(data.calls(), vec!["metrics"]);
    }
}
