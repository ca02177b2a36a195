//! Cart drawer visibility.
//!
//! The gate has a lifecycle independent of cart contents: closing the
//! drawer keeps the cart, opening it adds nothing.

use serde::{Deserialize, Serialize};

/// Whether the cart drawer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CartVisibility {
    Open,
    #[default]
    Closed,
}

impl CartVisibility {
    /// Show the drawer.
    pub fn open(&mut self) {
        *self = CartVisibility::Open;
    }

    /// Hide the drawer.
    pub fn close(&mut self) {
        *self = CartVisibility::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, CartVisibility::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!CartVisibility::default().is_open());
    }

    #[test]
    fn test_transitions() {
        let mut gate = CartVisibility::default();
        gate.open();
        assert!(gate.is_open());
        gate.close();
        assert!(!gate.is_open());
    }
}
