//! Storefront domain types and cart logic for Pantry.
//!
//! This crate owns the parts of a storefront with real state-transition
//! logic:
//!
//! - **Catalog**: product and stock types, the read-only lookup boundary,
//!   in-memory browsing (filter/sort)
//! - **Cart**: ordered line items, quantity mutation, exact subtotals
//! - **Reconciler**: the stock-ceiling policy applied to every quantity
//!   increase
//! - **Checkout**: immutable snapshots and the emission boundary
//!
//! # Example
//!
//! ```rust
//! use pantry_commerce::prelude::*;
//!
//! let peanut_butter = Product::new(
//!     "pb-crunchy-500",
//!     "Super Peanut Butter Crunchy",
//!     Money::from_major(349, Currency::INR),
//! )
//! .with_stock(120);
//!
//! let mut cart = Cart::default();
//! cart.add(&peanut_butter);
//! cart.add(&peanut_butter);
//!
//! assert_eq!(cart.total().unwrap(), Money::from_major(698, Currency::INR));
//! assert_eq!(cart.item_count(), 1);
//! ```

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::{CheckoutId, ProductId, SessionId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CheckoutId, ProductId, SessionId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::browse::{CatalogQuery, SortOption};
    pub use crate::catalog::{CatalogLookup, Product, StockLevel};

    // Cart
    pub use crate::cart::{Cart, CartChange, LineItem, NoOpReason};

    // Checkout
    pub use crate::checkout::{CheckoutRequest, CheckoutSink, CheckoutSnapshot};
}
