//! The storefront session: one owned state object, one mutation path.
//!
//! Every add-to-cart entry point (grid, product page, quick-view modal)
//! drives the same session commands, so behavior cannot diverge between
//! them. Commands apply atomically and sequentially: the session takes
//! `&mut self` for every mutation, and every read reflects the most
//! recently applied command.

use pantry_commerce::cart::{Cart, CartChange, LineItem, NoOpReason};
use pantry_commerce::catalog::CatalogLookup;
use pantry_commerce::checkout::{CheckoutRequest, CheckoutSink};
use pantry_commerce::error::CommerceError;
use pantry_commerce::ids::{CheckoutId, ProductId, SessionId};
use pantry_commerce::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::StorefrontConfig;
use crate::visibility::CartVisibility;

/// A discrete UI action delivered to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Add one unit of a product.
    Add(ProductId),
    /// Remove a line entirely.
    Remove(ProductId),
    /// Apply a signed quantity delta to a line.
    UpdateQuantity(ProductId, i64),
    /// Show the cart drawer.
    OpenCart,
    /// Hide the cart drawer.
    CloseCart,
    /// Validate the cart and emit a checkout request.
    Checkout,
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A cart mutation and its observable result.
    Cart(CartChange),
    /// The drawer state after an open/close command.
    Visibility(CartVisibility),
    /// A checkout request was emitted with this id.
    CheckoutSubmitted(CheckoutId),
    /// The checkout precondition failed; nothing was emitted.
    CheckoutRejected(CommerceError),
}

/// Owns the cart, the visibility gate, and the checkout boundary for one
/// shopper session.
///
/// `C` resolves products at the time of each action; `S` receives emitted
/// checkout requests. Neither is consulted outside a command.
pub struct StorefrontSession<C, S> {
    id: SessionId,
    cart: Cart,
    visibility: CartVisibility,
    catalog: C,
    sink: S,
    config: StorefrontConfig,
}

impl<C: CatalogLookup, S: CheckoutSink> StorefrontSession<C, S> {
    /// Create a session with default configuration.
    pub fn new(catalog: C, sink: S) -> Self {
        Self::with_config(catalog, sink, StorefrontConfig::default())
    }

    /// Create a session with the given configuration.
    pub fn with_config(catalog: C, sink: S, config: StorefrontConfig) -> Self {
        Self {
            id: SessionId::generate(),
            cart: Cart::new(config.currency),
            visibility: CartVisibility::default(),
            catalog,
            sink,
            config,
        }
    }

    /// Dispatch a single command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Add(id) => Outcome::Cart(self.add_to_cart(&id)),
            Command::Remove(id) => Outcome::Cart(self.remove_from_cart(&id)),
            Command::UpdateQuantity(id, delta) => {
                Outcome::Cart(self.update_quantity(&id, delta))
            }
            Command::OpenCart => {
                self.open_cart();
                Outcome::Visibility(self.visibility)
            }
            Command::CloseCart => {
                self.close_cart();
                Outcome::Visibility(self.visibility)
            }
            Command::Checkout => match self.initiate_checkout() {
                Ok(id) => Outcome::CheckoutSubmitted(id),
                Err(e) => Outcome::CheckoutRejected(e),
            },
        }
    }

    /// Add one unit of the identified product.
    ///
    /// Price and stock are resolved through the catalog at the time of the
    /// action. An unknown id is an absorbed no-op. When configured, an
    /// accepted add reveals the cart drawer.
    pub fn add_to_cart(&mut self, id: &ProductId) -> CartChange {
        let Some(product) = self.catalog.product(id) else {
            warn!(session = %self.id, product = %id, "add ignored: not in catalog");
            return CartChange::NoOp(NoOpReason::NotFound);
        };
        let change = self.cart.add(&product);
        debug!(session = %self.id, product = %id, ?change, "add to cart");
        if change.accepted() && self.config.open_cart_on_add {
            self.visibility.open();
        }
        change
    }

    /// Remove a line entirely. Idempotent; an absent id is absorbed.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> CartChange {
        let change = self.cart.remove(id);
        match change {
            CartChange::NoOp(reason) => {
                warn!(session = %self.id, product = %id, ?reason, "remove ignored")
            }
            _ => debug!(session = %self.id, product = %id, "removed from cart"),
        }
        change
    }

    /// Apply a signed quantity delta to a line.
    ///
    /// Increases are clamped against stock read from the catalog at the
    /// time of the action; decreases always succeed, and a quantity at or
    /// below zero removes the line.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> CartChange {
        let stock = self.catalog.product(id).map(|p| p.stock);
        let change = self.cart.update_quantity(id, delta, stock.as_ref());
        debug!(session = %self.id, product = %id, delta, ?change, "update quantity");
        change
    }

    /// Show the cart drawer. Does not touch cart contents.
    pub fn open_cart(&mut self) {
        self.visibility.open();
        debug!(session = %self.id, "cart opened");
    }

    /// Hide the cart drawer. Does not touch cart contents.
    pub fn close_cart(&mut self) {
        self.visibility.close();
        debug!(session = %self.id, "cart closed");
    }

    /// Validate the cart, emit exactly one checkout request, and close the
    /// drawer.
    ///
    /// An empty cart is rejected without emitting anything; the drawer is
    /// left as it was. The session guards this precondition itself rather
    /// than trusting the UI to have disabled the action.
    pub fn initiate_checkout(&mut self) -> Result<CheckoutId, CommerceError> {
        let request = match CheckoutRequest::capture(&self.cart) {
            Ok(request) => request,
            Err(e) => {
                warn!(session = %self.id, error = %e, "checkout rejected");
                return Err(e);
            }
        };
        let id = request.id.clone();
        debug!(
            session = %self.id,
            checkout = %id,
            total = %request.snapshot.total,
            items = request.snapshot.item_count,
            "checkout submitted"
        );
        self.sink.submit(request);
        self.visibility.close();
        Ok(id)
    }

    // Queries. All reflect the most recently applied command.

    /// Current line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Current cart total.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.cart.total()
    }

    /// Number of distinct line items (UI badge count).
    pub fn item_count(&self) -> usize {
        self.cart.item_count()
    }

    /// Sum of quantities across all lines.
    pub fn unit_count(&self) -> i64 {
        self.cart.unit_count()
    }

    /// Whether the cart drawer is showing.
    pub fn is_cart_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// The session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The owned cart, read-only.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The catalog handle.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The checkout sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use pantry_commerce::catalog::Product;
    use pantry_commerce::money::Currency;

    #[derive(Default)]
    struct RecordingSink {
        requests: Vec<CheckoutRequest>,
    }

    impl CheckoutSink for RecordingSink {
        fn submit(&mut self, request: CheckoutRequest) {
            self.requests.push(request);
        }
    }

    fn rs(units: i64) -> Money {
        Money::from_major(units, Currency::INR)
    }

    fn session() -> StorefrontSession<InMemoryCatalog, RecordingSink> {
        let catalog = InMemoryCatalog::new(vec![
            Product::new("a", "Product A", rs(100))
                .with_image("/img/product-a.webp")
                .with_stock(5),
            Product::new("b", "Product B", rs(250)).with_stock(1),
            Product::new("sold-out", "Gone", rs(99)).with_stock(0),
        ]);
        StorefrontSession::new(catalog, RecordingSink::default())
    }

    #[test]
    fn test_add_resolves_through_the_catalog() {
        let mut s = session();
        assert_eq!(s.add_to_cart(&"a".into()), CartChange::Added);
        assert_eq!(s.items()[0].unit_price, rs(100));
        assert_eq!(s.items()[0].image, "/img/product-a.webp");
    }

    #[test]
    fn test_add_unknown_id_is_absorbed() {
        let mut s = session();
        let change = s.add_to_cart(&"ghost".into());
        assert_eq!(change, CartChange::NoOp(NoOpReason::NotFound));
        assert!(s.items().is_empty());
        assert!(!s.is_cart_open());
    }

    #[test]
    fn test_accepted_add_opens_the_drawer() {
        let mut s = session();
        s.add_to_cart(&"a".into());
        assert!(s.is_cart_open());
    }

    #[test]
    fn test_rejected_add_leaves_the_drawer_closed() {
        let mut s = session();
        s.add_to_cart(&"sold-out".into());
        assert!(!s.is_cart_open());
    }

    #[test]
    fn test_open_cart_on_add_can_be_disabled() {
        let catalog = InMemoryCatalog::new(vec![
            Product::new("a", "Product A", rs(100)).with_stock(5)
        ]);
        let config = StorefrontConfig::new().with_open_cart_on_add(false);
        let mut s = StorefrontSession::with_config(catalog, RecordingSink::default(), config);

        s.add_to_cart(&"a".into());
        assert!(!s.is_cart_open());
    }

    #[test]
    fn test_command_dispatch_matches_direct_calls() {
        let mut s = session();
        let outcome = s.apply(Command::Add("a".into()));
        assert_eq!(outcome, Outcome::Cart(CartChange::Added));

        let outcome = s.apply(Command::UpdateQuantity("a".into(), 1));
        assert_eq!(outcome, Outcome::Cart(CartChange::Updated { quantity: 2 }));

        let outcome = s.apply(Command::CloseCart);
        assert_eq!(outcome, Outcome::Visibility(CartVisibility::Closed));
    }

    #[test]
    fn test_checkout_requires_a_non_empty_cart() {
        let mut s = session();
        assert_eq!(s.initiate_checkout(), Err(CommerceError::EmptyCart));
        assert!(s.sink().requests.is_empty());
    }

    #[test]
    fn test_checkout_emits_once_and_closes_the_drawer() {
        let mut s = session();
        s.add_to_cart(&"a".into());
        assert!(s.is_cart_open());

        let id = s.initiate_checkout().unwrap();
        assert_eq!(s.sink().requests.len(), 1);
        assert_eq!(s.sink().requests[0].id, id);
        assert!(!s.is_cart_open());
    }
}
