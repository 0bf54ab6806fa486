//! Application layer: state, workflows and use cases.

/// View models handed to screens.
pub mod dto;
/// Stateless helpers and the notification queue.
pub mod services;
/// Shared state container.
pub mod store;
/// Use case implementations.
pub mod use_cases;
/// Product creation wizard.
pub mod wizard;

pub use dto::{DashboardView, MarketView};
pub use services::{NotificationManager, ProductFilter};
pub use store::{AppStore, InitialLoadOutcome};
pub use use_cases::{
    CreateProductUseCase, GenerateSuggestionsUseCase, LoadDashboardUseCase,
    LoadInitialProductsUseCase, LoadMarketIntelligenceUseCase,
};
pub use wizard::{Wizard, WizardStep};
