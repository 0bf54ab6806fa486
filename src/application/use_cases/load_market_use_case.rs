//! Market intelligence loading.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::MarketView;
use crate::domain::errors::ApiError;
use crate::domain::ports::{FlavorDataPort, TrendsQuery};

/// Shared error shown when market data cannot be loaded.
pub const MARKET_LOAD_FAILED: &str = "Failed to fetch market intelligence data.";

/// Fetches trends, then competitors.
#[derive(Clone)]
pub struct LoadMarketIntelligenceUseCase {
    data: Arc<dyn FlavorDataPort>,
}

impl LoadMarketIntelligenceUseCase {
    /// Creates the use case over a data port.
    #[must_use]
    pub const fn new(data: Arc<dyn FlavorDataPort>) -> Self {
        Self { data }
    }

    /// # Errors
    /// Returns the first collaborator error.
    pub async fn execute(&self, query: TrendsQuery) -> Result<MarketView, ApiError> {
        debug!(region = ?query.region, category = ?query.category, "Loading market intelligence");

        let trends = self.data.fetch_market_trends(query).await.map_err(|e| {
            warn!(error = %e, "Market trends request failed");
            e
        })?;
        let competitors = self
            .data
            .fetch_competitors(query.category)
            .await
            .map_err(|e| {
                warn!(error = %e, "Competitors request failed");
                e
            })?;

        Ok(MarketView {
            trends,
            competitors,
        })
    }
}
