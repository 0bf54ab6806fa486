//! Dashboard metrics and market-intelligence data.

use serde::{Deserialize, Serialize};

/// Month-over-month growth deltas, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMetrics {
    /// Change in total products.
    #[serde(default)]
    pub products_growth: f64,
    /// Change in success rate.
    #[serde(default)]
    pub success_rate_growth: f64,
    /// Change in active users.
    #[serde(default)]
    pub users_growth: f64,
}

/// Monthly product count per leading category.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChartPoint {
    pub month: String,
    #[serde(default)]
    pub beverages: u64,
    #[serde(default)]
    pub snacks: u64,
    #[serde(default)]
    pub dairy: u64,
}

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Products tracked across all categories.
    pub total_products: u64,
    /// Share of products that reached the market, in percent.
    pub success_rate: f64,
    /// Users active in the current period.
    pub active_users: u64,
    /// Categories currently trending.
    pub trending_categories: u64,
    /// Growth deltas shown under each card.
    #[serde(default, rename = "growthMetrics")]
    pub growth: GrowthMetrics,
    /// Series for the category chart.
    #[serde(default)]
    pub chart_data: Vec<CategoryChartPoint>,
}

/// Ingredient gaining traction in the market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingIngredient {
    /// Ingredient name.
    pub name: String,
    /// Popularity score, 0 to 100.
    #[serde(with = "crate::domain::serde_utils::score")]
    pub score: u8,
    /// Signed percentage such as `+15%`.
    pub growth: String,
}

/// Share of interest attributed to one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalShare {
    /// Region label.
    #[serde(alias = "region")]
    pub name: String,
    /// Share of interest, in percent.
    pub percentage: f64,
}

/// Monthly interest per consumer trend.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub month: String,
    #[serde(default)]
    pub healthy: f64,
    #[serde(default)]
    pub organic: f64,
    #[serde(default)]
    pub plant_based: f64,
    #[serde(default)]
    pub functional: f64,
}

/// Market trend report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrends {
    /// Ingredients ranked by score.
    #[serde(default)]
    pub trending_ingredients: Vec<TrendingIngredient>,
    /// Interest split by region.
    #[serde(default)]
    pub regional_data: Vec<RegionalShare>,
    /// Monthly trend series for the timeline chart.
    #[serde(default)]
    pub timeline_data: Vec<TimelinePoint>,
}

/// Competing company summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// Company name.
    pub company: String,
    /// Products the company has on the market.
    pub products: u64,
    /// Average market score.
    pub score: f64,
    /// Signed percentage such as `-3%`.
    pub trend: String,
}

/// Returns true when a signed percentage string denotes growth.
#[must_use]
pub fn is_positive_trend(trend: &str) -> bool {
    trend.trim_start().starts_with('+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_metrics_from_backend() {
        let json = r#"{
            "totalProducts": 1247,
            "successRate": 73.5,
            "activeUsers": 8934,
            "trendingCategories": 12,
            "growthMetrics": {"productsGrowth": 12, "successRateGrowth": 5.2, "usersGrowth": 18}
        }"#;

        let metrics: DashboardMetrics = serde_json::from_str(json).expect("valid metrics");
        assert_eq!(metrics.total_products, 1247);
        assert!((metrics.growth.success_rate_growth - 5.2).abs() < f64::EPSILON);
        assert!(metrics.chart_data.is_empty());
    }

    #[test]
    fn test_trends_accepts_region_alias() {
        let json = r#"{"regionalData": [{"region": "Europe", "percentage": 28}]}"#;
        let trends: MarketTrends = serde_json::from_str(json).expect("valid trends");
        assert_eq!(trends.regional_data[0].name, "Europe");
        assert!(trends.trending_ingredients.is_empty());
    }

    #[test]
    fn test_positive_trend() {
        assert!(is_positive_trend("+15%"));
        assert!(!is_positive_trend("-2%"));
        assert!(!is_positive_trend("0%"));
    }
}
