//! The cart store: an ordered sequence of line items and all mutation logic.

use crate::cart::reconcile::{reconcile, StockDecision};
use crate::catalog::{Product, StockLevel};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One entry in the cart: a distinct product and its chosen quantity.
///
/// Lines are keyed by product id, one line per distinct product. The unit
/// price is captured when the line is created and does not track later
/// catalog price changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Id of the product this line represents.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price captured at add time.
    pub unit_price: Money,
    /// Image reference (denormalized for display).
    pub image: String,
    /// Chosen quantity. Never observable below 1.
    pub quantity: i64,
}

impl LineItem {
    fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Line subtotal: unit price times quantity, checked.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_mul(self.quantity)
    }
}

/// Why a command left the cart untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoOpReason {
    /// The id matched no cart line (or no catalog product).
    NotFound,
    /// Stock is exhausted or unknown, so the increase was rejected.
    OutOfStock,
}

/// Observable outcome of a cart mutation.
///
/// Invalid commands degrade to [`CartChange::NoOp`] rather than errors:
/// the cart has no external state to roll back, so there is nothing for a
/// caller to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartChange {
    /// A new line was appended.
    Added,
    /// An existing line's quantity changed to the contained value.
    Updated { quantity: i64 },
    /// The request exceeded stock; the line holds the ceiling instead.
    Clamped { quantity: i64 },
    /// The line was removed.
    Removed,
    /// Nothing changed.
    NoOp(NoOpReason),
}

impl CartChange {
    /// Whether the command found its target and was applied, possibly
    /// clamped.
    pub fn accepted(&self) -> bool {
        !matches!(self, CartChange::NoOp(_))
    }
}

/// Ordered collection of line items. Insertion order is preserved: the
/// first-added line stays first unless removed.
///
/// The store owns every mutation but no stock policy; quantity increases
/// are passed through [`reconcile`] before being committed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl Cart {
    /// Create an empty cart pricing in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line is incremented, a new line is appended at the end
    /// with quantity 1; either way the result is subject to the stock
    /// ceiling. Out-of-stock products are a rejected no-op.
    pub fn add(&mut self, product: &Product) -> CartChange {
        let position = self.position(&product.id);
        let current = position.map(|i| self.items[i].quantity);
        let requested = current.unwrap_or(0) + 1;

        let (quantity, clamped) = match reconcile(requested, Some(&product.stock)) {
            StockDecision::Admit(q) => (q, false),
            StockDecision::Clamp(q) => (q, true),
            StockDecision::Reject => return CartChange::NoOp(NoOpReason::OutOfStock),
        };

        match position {
            Some(i) => {
                self.items[i].quantity = quantity;
                if clamped {
                    CartChange::Clamped { quantity }
                } else {
                    CartChange::Updated { quantity }
                }
            }
            None => {
                self.items.push(LineItem::from_product(product, quantity));
                CartChange::Added
            }
        }
    }

    /// Remove the line with this id. An absent id is a no-op, not an error.
    pub fn remove(&mut self, id: &ProductId) -> CartChange {
        match self.position(id) {
            Some(i) => {
                self.items.remove(i);
                CartChange::Removed
            }
            None => CartChange::NoOp(NoOpReason::NotFound),
        }
    }

    /// Apply a signed quantity delta to the line with this id.
    ///
    /// A new quantity at or below zero removes the line. Increases are
    /// subject to the stock ceiling known at the time of the action;
    /// decreases never consult stock and always succeed.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        delta: i64,
        stock: Option<&StockLevel>,
    ) -> CartChange {
        let Some(i) = self.position(id) else {
            return CartChange::NoOp(NoOpReason::NotFound);
        };
        let current = self.items[i].quantity;
        let requested = current.saturating_add(delta);

        if requested <= 0 {
            self.items.remove(i);
            return CartChange::Removed;
        }

        let (quantity, clamped) = if requested > current {
            match reconcile(requested, stock) {
                StockDecision::Admit(q) => (q, false),
                StockDecision::Clamp(q) => (q, true),
                StockDecision::Reject => return CartChange::NoOp(NoOpReason::OutOfStock),
            }
        } else {
            (requested, false)
        };

        self.items[i].quantity = quantity;
        if clamped {
            CartChange::Clamped { quantity }
        } else {
            CartChange::Updated { quantity }
        }
    }

    /// Sum of line subtotals. Zero for an empty cart; recomputed on every
    /// call, never cached.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let mut sum = Money::zero(self.currency);
        for line in &self.items {
            sum = sum.try_add(&line.subtotal()?)?;
        }
        Ok(sum)
    }

    /// Number of distinct line items (UI badge count).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines.
    pub fn unit_count(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line for a product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.position(id).map(|i| &self.items[i])
    }

    /// The currency this cart prices in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|l| &l.product_id == id)
    }
}
