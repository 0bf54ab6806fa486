//! Product entity and its enumerated attributes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(#[serde(with = "crate::domain::serde_utils::string_or_number")] String);

impl ProductId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds an identifier from a Unix timestamp in milliseconds.
    ///
    /// Two products created within the same millisecond share an id.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product category.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Beverages,
    Snacks,
    Dairy,
    Cereals,
    Confectionery,
    #[serde(rename = "Frozen Foods")]
    FrozenFoods,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Beverages,
        Self::Snacks,
        Self::Dairy,
        Self::Cereals,
        Self::FrozenFoods,
        Self::Confectionery,
    ];

    /// Returns the human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
            Self::Dairy => "Dairy",
            Self::Cereals => "Cereals",
            Self::Confectionery => "Confectionery",
            Self::FrozenFoods => "Frozen Foods",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Lifecycle status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    /// On the market.
    Active,
    /// Newly created and still being validated.
    Testing,
}

impl ProductStatus {
    /// Returns the human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Testing => "Testing",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bound of a market score.
pub const MAX_SCORE: u8 = 100;

/// A food product tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    #[serde(with = "crate::domain::serde_utils::score")]
    score: u8,
    status: ProductStatus,
    #[serde(with = "crate::domain::serde_utils::lenient_date")]
    created: NaiveDate,
}

impl Product {
    /// Creates a product. Scores above 100 are clamped.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        score: u8,
        status: ProductStatus,
        created: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            score: score.min(MAX_SCORE),
            status,
            created,
        }
    }

    /// Returns the product id.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the market score, 0 to 100.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProductStatus {
        self.status
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn created(&self) -> NaiveDate {
        self.created
    }
}

/// Fields sent to the service when creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Category.
    pub category: Category,
    /// Market score.
    pub score: u8,
    /// Initial status; new products start in testing.
    pub status: ProductStatus,
    /// Creation date, sent as `YYYY-MM-DD`.
    #[serde(with = "crate::domain::serde_utils::lenient_date")]
    pub created: NaiveDate,
}

impl From<&Product> for NewProduct {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category,
            score: product.score,
            status: product.status,
            created: product.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            ProductId::new("1"),
            "Spiced Turmeric Latte",
            Category::Beverages,
            87,
            ProductStatus::Active,
            date(),
        );

        assert_eq!(product.id().as_str(), "1");
        assert_eq!(product.name(), "Spiced Turmeric Latte");
        assert_eq!(product.category(), Category::Beverages);
        assert_eq!(product.score(), 87);
        assert_eq!(product.status(), ProductStatus::Active);
    }

    #[test]
    fn test_score_is_clamped() {
        let product = Product::new(
            ProductId::new("1"),
            "Overachiever",
            Category::Snacks,
            250,
            ProductStatus::Testing,
            date(),
        );
        assert_eq!(product.score(), MAX_SCORE);
    }

    #[test_case("Beverages", Category::Beverages ; "exact")]
    #[test_case("frozen foods", Category::FrozenFoods ; "lowercase_with_space")]
    #[test_case(" Dairy ", Category::Dairy ; "padded")]
    fn test_category_from_str(input: &str, expected: Category) {
        assert_eq!(input.parse::<Category>(), Ok(expected));
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("Pet Food".parse::<Category>().is_err());
    }

    #[test]
    fn test_product_deserializes_backend_shape() {
        let json = r#"{
            "id": 2,
            "name": "Coconut Quinoa Bites",
            "category": "Snacks",
            "score": 82,
            "status": "Testing",
            "created": "2024-01-10"
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(product.id().as_str(), "2");
        assert_eq!(product.category(), Category::Snacks);
        assert_eq!(product.status(), ProductStatus::Testing);
    }

    #[test]
    fn test_product_rejects_unknown_fields() {
        let json = r#"{
            "id": 2, "name": "X", "category": "Snacks", "score": 1,
            "status": "Active", "created": "2024-01-10", "color": "red"
        }"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_frozen_foods_wire_name() {
        let json = serde_json::to_string(&Category::FrozenFoods).unwrap();
        assert_eq!(json, r#""Frozen Foods""#);
    }

    #[test]
    fn test_timestamp_ids_collide_within_same_millisecond() {
        let a = ProductId::from_timestamp_millis(1_700_000_000_000);
        let b = ProductId::from_timestamp_millis(1_700_000_000_000);
        assert_eq!(a, b);
    }
}
