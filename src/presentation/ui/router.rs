//! Maps the store's screen identifier to the view that renders it.

use crate::domain::Screen;
use crate::domain::keybinding::{
    Keybind, analysis_keybinds, dashboard_keybinds, wizard_keybinds,
};

/// Concrete view shown in the content area.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Creator,
    ProductAnalysis,
    MarketIntelligence,
}

impl View {
    /// Views that fetch their data every time they are shown.
    #[must_use]
    pub const fn fetches_on_mount(self) -> bool {
        matches!(self, Self::Dashboard | Self::MarketIntelligence)
    }

    /// Label shown in the footer.
    #[must_use]
    pub const fn context_label(self) -> &'static str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::Creator => "CREATOR",
            Self::ProductAnalysis => "ANALYSIS",
            Self::MarketIntelligence => "MARKET",
        }
    }

    /// Bindings specific to this view; global ones are not included.
    #[must_use]
    pub fn keybinds(self) -> Vec<Keybind> {
        match self {
            Self::Dashboard => dashboard_keybinds(),
            Self::Creator => wizard_keybinds(),
            Self::ProductAnalysis => analysis_keybinds(),
            Self::MarketIntelligence => Vec::new(),
        }
    }
}

/// Unknown identifiers fall back to the dashboard.
#[must_use]
pub fn route(screen: &Screen) -> View {
    match screen {
        Screen::Dashboard | Screen::Unknown(_) => View::Dashboard,
        Screen::Creator => View::Creator,
        Screen::ProductAnalysis => View::ProductAnalysis,
        Screen::MarketIntelligence => View::MarketIntelligence,
    }
}
