//! Initial product collection load.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::Product;
use crate::domain::errors::ApiError;
use crate::domain::ports::{FlavorDataPort, ProductQuery};

/// Loads the product collection once at startup.
#[derive(Clone)]
pub struct LoadInitialProductsUseCase {
    data: Arc<dyn FlavorDataPort>,
}

impl LoadInitialProductsUseCase {
    /// Creates the use case over a data port.
    #[must_use]
    pub const fn new(data: Arc<dyn FlavorDataPort>) -> Self {
        Self { data }
    }

    /// # Errors
    /// Returns the collaborator error unchanged.
    pub async fn execute(&self) -> Result<Vec<Product>, ApiError> {
        debug!("Fetching initial product collection");
        self.data.fetch_products(ProductQuery::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::{AppStore, InitialLoadOutcome};
    use crate::domain::entities::Category;
    use crate::domain::ports::mocks::{MockFlavorData, product};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_initial_load_populates_store() {
        let data = Arc::new(
            MockFlavorData::new()
                .with_products(vec![product("1", "Spiced Turmeric Latte", Category::Beverages)]),
        );
        let use_case = LoadInitialProductsUseCase::new(data);
        let mut store = AppStore::new();

        assert!(store.begin_initial_load());
        let outcome = store.complete_initial_load(use_case.execute().await);

        assert_eq!(outcome, InitialLoadOutcome::Loaded(1));
        assert_eq!(store.products()[0].name(), "Spiced Turmeric Latte");
    }

    #[tokio::test]
    async fn test_initial_load_failure_leaves_store_clean() {
        let data = Arc::new(MockFlavorData::new());
        data.fail_products.store(true, Ordering::SeqCst);
        let use_case = LoadInitialProductsUseCase::new(data);
        let mut store = AppStore::new();

        store.begin_initial_load();
        let outcome = store.complete_initial_load(use_case.execute().await);

        assert!(matches!(outcome, InitialLoadOutcome::Failed(_)));
        assert!(store.error().is_none());
        assert!(store.products().is_empty());
    }
}
