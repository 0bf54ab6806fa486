//! Data transfer objects.

mod view_dto;

pub use view_dto::{DashboardView, MarketView, RECENT_PRODUCTS};
