/// Popup notification queue.
pub mod notification_manager;
/// Product search and category filtering.
pub mod product_filter;

pub use notification_manager::NotificationManager;
pub use product_filter::ProductFilter;
