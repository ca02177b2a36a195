//! In-memory catalog browsing: category and text filters with sorting.
//!
//! Purely functional over a product slice; sold-out products stay in the
//! results so the shop page can badge them instead of hiding them.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort options for browse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// Name A-Z.
    NameAsc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::NameAsc => "Name: A-Z",
        }
    }
}

/// A browse query over the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Restrict to one category name.
    pub category: Option<String>,
    /// Case-insensitive text match on name and description.
    pub query: Option<String>,
    /// Result ordering.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create an unrestricted query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the text query. An empty string clears it.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a product passes both filters.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }

    /// Filter and sort a product slice.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut results: Vec<Product> = products.iter().filter(|p| self.matches(p)).cloned().collect();
        match self.sort {
            SortOption::Featured => {}
            SortOption::PriceAsc => {
                results.sort_by_key(|p| p.price.amount_minor);
            }
            SortOption::PriceDesc => {
                results.sort_by_key(|p| std::cmp::Reverse(p.price.amount_minor));
            }
            SortOption::Rating => {
                results.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
            SortOption::NameAsc => {
                results.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }
        results
    }
}
