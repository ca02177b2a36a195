//! Product type.

use crate::catalog::StockLevel;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Owned by the catalog and read-only to the cart, which snapshots the
/// price when a line item is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current unit price.
    pub price: Money,
    /// Pre-discount price, shown struck through when above `price`.
    pub compare_at_price: Option<Money>,
    /// Image reference.
    pub image: String,
    /// Category name.
    pub category: String,
    /// Average review rating.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Stock on hand.
    pub stock: StockLevel,
    /// Merchandising extras (nutrient tables, benefit bullets, gallery
    /// references). Opaque to the cart.
    pub metadata: serde_json::Value,
}

impl Product {
    /// Create a product with the given id, name, and price.
    ///
    /// Stock defaults to zero; use [`Product::with_stock`] to make the
    /// product sellable.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            compare_at_price: None,
            image: String::new(),
            category: String::new(),
            rating: 0.0,
            review_count: 0,
            stock: StockLevel::default(),
            metadata: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the stock on hand.
    pub fn with_stock(mut self, on_hand: i64) -> Self {
        self.stock = StockLevel::new(on_hand);
        self
    }

    /// Set the category name.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the pre-discount price.
    pub fn with_compare_at(mut self, price: Money) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    /// Set the review rating and count.
    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Whether the product cannot currently be sold.
    pub fn is_sold_out(&self) -> bool {
        !self.stock.is_sellable()
    }

    /// Whether the product has a pre-discount price above the current one.
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Discount as a rounded percentage of the pre-discount price.
    pub fn discount_percent(&self) -> Option<i64> {
        let original = self.compare_at_price?;
        if original.amount_minor <= self.price.amount_minor || original.amount_minor == 0 {
            return None;
        }
        let savings = original.amount_minor - self.price.amount_minor;
        Some(((savings as f64 / original.amount_minor as f64) * 100.0).round() as i64)
    }
}
