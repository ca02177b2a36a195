//! Checkout hand-off: immutable snapshots and the emission boundary.

use crate::cart::{Cart, LineItem};
use crate::error::CommerceError;
use crate::ids::CheckoutId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An immutable copy of cart state taken at checkout time.
///
/// Owns deep clones of the line items, so later cart mutation cannot
/// retroactively alter a snapshot that has already been emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSnapshot {
    /// Line items at capture time, in cart order.
    pub line_items: Vec<LineItem>,
    /// Cart total at capture time.
    pub total: Money,
    /// Number of distinct line items at capture time.
    pub item_count: usize,
}

impl CheckoutSnapshot {
    /// Capture the current cart state.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when there is nothing to
    /// check out; the caller must not emit anything in that case.
    pub fn capture(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self {
            line_items: cart.items().to_vec(),
            total: cart.total()?,
            item_count: cart.item_count(),
        })
    }
}

/// A single checkout request for the order-processing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    /// Generated request identifier.
    pub id: CheckoutId,
    /// Frozen cart state.
    pub snapshot: CheckoutSnapshot,
}

impl CheckoutRequest {
    /// Build a request around a snapshot of the current cart state.
    pub fn capture(cart: &Cart) -> Result<Self, CommerceError> {
        Ok(Self {
            id: CheckoutId::generate(),
            snapshot: CheckoutSnapshot::capture(cart)?,
        })
    }
}

/// The order-processing boundary.
///
/// Fire-and-forget: the core submits exactly one request per successful
/// checkout and never inspects how the sink handles it. Order lifecycle,
/// retries, and failure surfacing belong to the collaborator behind this
/// trait.
pub trait CheckoutSink {
    /// Accept an emitted checkout request.
    fn submit(&mut self, request: CheckoutRequest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Currency;

    fn rs(units: i64) -> Money {
        Money::from_major(units, Currency::INR)
    }

    #[test]
    fn test_empty_cart_cannot_be_captured() {
        let cart = Cart::default();
        assert_eq!(
            CheckoutSnapshot::capture(&cart),
            Err(CommerceError::EmptyCart)
        );
    }

    #[test]
    fn test_snapshot_does_not_alias_the_cart() {
        let mut cart = Cart::default();
        let a = Product::new("a", "Product a", rs(100)).with_stock(5);
        cart.add(&a);
        cart.add(&a);

        let snapshot = CheckoutSnapshot::capture(&cart).unwrap();
        assert_eq!(snapshot.total, rs(200));

        cart.add(&a);
        cart.remove(&"a".into());

        // The emitted copy is unchanged by later mutation.
        assert_eq!(snapshot.total, rs(200));
        assert_eq!(snapshot.item_count, 1);
        assert_eq!(snapshot.line_items[0].quantity, 2);
    }
}
