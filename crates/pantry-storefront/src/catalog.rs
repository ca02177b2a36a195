//! In-memory catalog backing the lookup boundary.

use pantry_commerce::catalog::{CatalogLookup, Product};
use pantry_commerce::ids::ProductId;

/// A catalog held entirely in memory.
///
/// Stands in for whatever fetch layer the host wires up; the session only
/// ever sees the [`CatalogLookup`] boundary.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Create a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Insert a product, replacing any existing product with the same id.
    pub fn insert(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !product.category.is_empty() && !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn product(&self, id: &ProductId) -> Option<Product> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }
}
