//! Session configuration.

use pantry_commerce::money::Currency;

/// Tunables for a storefront session.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Currency the cart prices in.
    pub currency: Currency,
    /// Whether a successful add reveals the cart drawer.
    pub open_cart_on_add: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            open_cart_on_add: true,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cart currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set whether a successful add reveals the cart drawer.
    pub fn with_open_cart_on_add(mut self, open: bool) -> Self {
        self.open_cart_on_add = open;
        self
    }
}
