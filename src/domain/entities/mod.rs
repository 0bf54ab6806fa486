//! Domain entity definitions.

mod form;
mod market;
mod product;
mod suggestion;

pub use form::{AgeGroup, Flavor, Region, WizardForm};
pub use market::{
    CategoryChartPoint, Competitor, DashboardMetrics, GrowthMetrics, MarketTrends, RegionalShare,
    TimelinePoint, TrendingIngredient, is_positive_trend,
};
pub use product::{Category, MAX_SCORE, NewProduct, Product, ProductId, ProductStatus};
pub use suggestion::AiSuggestion;
