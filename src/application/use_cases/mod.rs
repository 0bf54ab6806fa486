mod create_product_use_case;
mod generate_suggestions_use_case;
mod load_dashboard_use_case;
mod load_market_use_case;
mod load_products_use_case;

pub use create_product_use_case::CreateProductUseCase;
pub use generate_suggestions_use_case::{
    GenerateSuggestionsUseCase, SUGGESTIONS_FAILED, apply_suggestions,
};
pub use load_dashboard_use_case::{DASHBOARD_LOAD_FAILED, LoadDashboardUseCase};
pub use load_market_use_case::{LoadMarketIntelligenceUseCase, MARKET_LOAD_FAILED};
pub use load_products_use_case::LoadInitialProductsUseCase;
