//! Stock level tracking.

use serde::{Deserialize, Serialize};

/// Stock on hand for a product.
///
/// Zero or negative means the product cannot be sold. There is no
/// reservation concept: stock is read at the time of each cart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StockLevel {
    /// Units on hand.
    pub on_hand: i64,
}

impl StockLevel {
    /// Create a stock level.
    pub fn new(on_hand: i64) -> Self {
        Self { on_hand }
    }

    /// Whether at least one unit can be sold.
    pub fn is_sellable(&self) -> bool {
        self.on_hand > 0
    }

    /// The quantity ceiling, or `None` when nothing can be sold.
    pub fn limit(&self) -> Option<i64> {
        if self.is_sellable() {
            Some(self.on_hand)
        } else {
            None
        }
    }
}
