//! Turns the selected AI concept into a tracked product.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::application::services::NotificationManager;
use crate::application::store::AppStore;
use crate::application::wizard::{CreateError, Wizard};
use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::errors::ApiError;
use crate::domain::ports::FlavorDataPort;
use crate::domain::screen::Screen;

/// Creates products from the wizard and optionally mirrors them to the
/// backend.
#[derive(Clone, Default)]
pub struct CreateProductUseCase {
    remote: Option<Arc<dyn FlavorDataPort>>,
}

impl CreateProductUseCase {
    /// Creates products locally only.
    #[must_use]
    pub const fn new() -> Self {
        Self { remote: None }
    }

    /// Also sends every created product to `POST /products`.
    #[must_use]
    pub fn with_persistence(mut self, data: Arc<dyn FlavorDataPort>) -> Self {
        self.remote = Some(data);
        self
    }

    /// Returns whether created products are sent to the service.
    #[must_use]
    pub const fn persists(&self) -> bool {
        self.remote.is_some()
    }

    /// Creates the product using the local clock.
    ///
    /// # Errors
    /// See [`Self::execute_at`].
    pub fn execute(
        &self,
        wizard: &mut Wizard,
        store: &mut AppStore,
        notifications: &mut NotificationManager,
    ) -> Result<Product, CreateError> {
        self.execute_at(wizard, store, notifications, Local::now())
    }

    /// Creates the product, appends it to the store, announces it and moves
    /// to the analysis screen.
    ///
    /// # Errors
    /// Returns [`CreateError`] when the wizard refuses; a missing selection
    /// is also raised as an error notification.
    pub fn execute_at(
        &self,
        wizard: &mut Wizard,
        store: &mut AppStore,
        notifications: &mut NotificationManager,
        now: DateTime<Local>,
    ) -> Result<Product, CreateError> {
        let id = ProductId::from_timestamp_millis(now.timestamp_millis());
        let product = match wizard.create(id, now.date_naive()) {
            Ok(product) => product,
            Err(e) => {
                if e == CreateError::NoSelection {
                    notifications.error(e.to_string());
                }
                return Err(e);
            }
        };

        info!(id = %product.id(), name = %product.name(), "Product created");
        store.add_product(product.clone());
        notifications.success(format!("Product \"{}\" created successfully!", product.name()));
        store.set_screen(Screen::ProductAnalysis);
        Ok(product)
    }

    /// Mirrors a created product to the backend. No-op without persistence.
    ///
    /// # Errors
    /// Returns the collaborator error unchanged.
    pub async fn persist(&self, product: &Product) -> Result<Option<Product>, ApiError> {
        let Some(remote) = &self.remote else {
            return Ok(None);
        };
        match remote.create_product(NewProduct::from(product)).await {
            Ok(saved) => Ok(Some(saved)),
            Err(e) => {
                warn!(error = %e, id = %product.id(), "Failed to persist product");
                Err(e)
            }
        }
    }
}
