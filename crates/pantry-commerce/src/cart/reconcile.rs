//! Quantity/stock reconciliation policy.
//!
//! The cart store consults this before committing any quantity increase.
//! Decrements and removals never pass through here; they always succeed.

use crate::catalog::StockLevel;

/// Outcome of reconciling a requested quantity against known stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDecision {
    /// The requested quantity fits within stock; commit it.
    Admit(i64),
    /// The requested quantity exceeds stock; commit the ceiling instead.
    Clamp(i64),
    /// Stock is unknown or exhausted; leave the cart unchanged.
    Reject,
}

/// Reconcile a prospective line quantity against stock known at the time
/// of the action. `stock` is `None` when the catalog could not resolve the
/// product.
pub fn reconcile(requested: i64, stock: Option<&StockLevel>) -> StockDecision {
    let Some(limit) = stock.and_then(StockLevel::limit) else {
        return StockDecision::Reject;
    };
    if requested <= limit {
        StockDecision::Admit(requested)
    } else {
        StockDecision::Clamp(limit)
    }
}
