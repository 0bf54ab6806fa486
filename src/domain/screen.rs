//! Top-level screen identifiers.

use std::fmt;

/// Screen the router can display.
///
/// Identifiers that match no known screen are kept verbatim in `Unknown` so
/// the fallback to the dashboard stays observable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Metrics overview, the start screen.
    #[default]
    Dashboard,
    /// Guided product creation wizard.
    Creator,
    /// Searchable product table.
    ProductAnalysis,
    /// Trends, regional shares and competitors.
    MarketIntelligence,
    /// An identifier matching no screen; renders the dashboard.
    Unknown(String),
}

impl Screen {
    /// Known screens in navigation order.
    pub const NAVIGABLE: [Self; 4] = [
        Self::Dashboard,
        Self::Creator,
        Self::ProductAnalysis,
        Self::MarketIntelligence,
    ];

    /// Parses a screen identifier. Never fails.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Self::Dashboard,
            "creator" | "create product" | "create-product" => Self::Creator,
            "product-analysis" | "product analysis" | "analysis" => Self::ProductAnalysis,
            "market-intelligence" | "market intelligence" => Self::MarketIntelligence,
            _ => Self::Unknown(id.to_string()),
        }
    }

    /// Canonical identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Creator => "creator",
            Self::ProductAnalysis => "product-analysis",
            Self::MarketIntelligence => "market-intelligence",
            Self::Unknown(raw) => raw,
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard | Self::Unknown(_) => "Dashboard",
            Self::Creator => "Create Product",
            Self::ProductAnalysis => "Product Analysis",
            Self::MarketIntelligence => "Market Intelligence",
        }
    }

    fn position(&self) -> usize {
        Self::NAVIGABLE
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// Next screen in navigation order, wrapping around.
    #[must_use]
    pub fn next(&self) -> Self {
        let idx = (self.position() + 1) % Self::NAVIGABLE.len();
        Self::NAVIGABLE[idx].clone()
    }

    /// Previous screen in navigation order, wrapping around.
    #[must_use]
    pub fn previous(&self) -> Self {
        let len = Self::NAVIGABLE.len();
        let idx = (self.position() + len - 1) % len;
        Self::NAVIGABLE[idx].clone()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("dashboard", Screen::Dashboard ; "dashboard")]
    #[test_case("creator", Screen::Creator ; "creator")]
    #[test_case("create product", Screen::Creator ; "creator_label")]
    #[test_case("product-analysis", Screen::ProductAnalysis ; "analysis_id")]
    #[test_case("analysis", Screen::ProductAnalysis ; "analysis_short")]
    #[test_case("Market Intelligence", Screen::MarketIntelligence ; "market_label")]
    fn test_from_id(input: &str, expected: Screen) {
        assert_eq!(Screen::from_id(input), expected);
    }

    #[test]
    fn test_unknown_id_is_preserved() {
        let screen = Screen::from_id("settings");
        assert_eq!(screen, Screen::Unknown("settings".to_string()));
        assert_eq!(screen.id(), "settings");
        assert_eq!(screen.title(), "Dashboard");
    }

    #[test]
    fn test_navigation_wraps() {
        assert_eq!(Screen::MarketIntelligence.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.previous(), Screen::MarketIntelligence);
        assert_eq!(Screen::Unknown("x".into()).next(), Screen::Creator);
    }
}
