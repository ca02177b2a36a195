//! Storefront error types.

use thiserror::Error;

/// Errors surfaced by cart and checkout operations.
///
/// The taxonomy is deliberately narrow. Commands with nothing to act on
/// (removing an id that is not in the cart, adding a product the catalog
/// does not know or cannot sell) degrade to no-op outcomes instead of
/// errors; see [`crate::cart::CartChange`]. What remains here are the
/// conditions a caller must actually handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Checkout attempted with zero line items.
    #[error("checkout attempted with an empty cart")]
    EmptyCart,

    /// Arithmetic overflow in a money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Two money values with different currencies were combined.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}
