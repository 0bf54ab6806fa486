//! UI screens.

mod analysis_screen;
mod app;
mod creator_screen;
mod dashboard_screen;
mod market_screen;
mod notification_popup;
mod router;
mod utils;

pub use analysis_screen::AnalysisScreen;
pub use app::{App, AppOptions};
pub use creator_screen::{CreatorOption, CreatorScreen};
pub use dashboard_screen::DashboardScreen;
pub use market_screen::MarketScreen;
pub use notification_popup::NotificationPopup;
pub use router::{View, route};
