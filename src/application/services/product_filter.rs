//! Search and category filtering for the product table.

use crate::domain::entities::{Category, Product};

/// Criteria applied to the product collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    search_lower: String,
    category: Option<Category>,
}

impl ProductFilter {
    /// Builds a filter; an empty search matches every name.
    #[must_use]
    pub fn new(search: &str, category: Option<Category>) -> Self {
        Self {
            search_lower: search.to_lowercase(),
            category,
        }
    }

    /// Case-insensitive substring match on the name, plus exact category
    /// match when a category is set.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = product.name().to_lowercase().contains(&self.search_lower);
        let matches_category = self.category.is_none_or(|c| product.category() == c);
        matches_search && matches_category
    }

    /// Returns matching products in their original order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Returns whether any criterion is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_lower.is_empty() || self.category.is_some()
    }
}
