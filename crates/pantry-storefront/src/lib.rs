//! Storefront session engine for Pantry.
//!
//! Re-architects per-widget cart state into a single owned state object
//! with an explicit command-dispatch interface: the session owns the cart,
//! the drawer visibility gate, and the checkout trigger, and every UI
//! entry point mutates state through the same commands.
//!
//! # Example
//!
//! ```rust,ignore
//! use pantry_commerce::prelude::*;
//! use pantry_storefront::{Command, InMemoryCatalog, StorefrontSession};
//!
//! let catalog = InMemoryCatalog::new(products);
//! let mut session = StorefrontSession::new(catalog, order_sink);
//!
//! session.apply(Command::Add("pb-crunchy-500".into()));
//! session.apply(Command::Add("muesli-choco".into()));
//! println!("cart total: {}", session.total()?);
//!
//! session.apply(Command::Checkout);
//! ```

pub mod catalog;
pub mod config;
pub mod session;
pub mod visibility;

pub use catalog::InMemoryCatalog;
pub use config::StorefrontConfig;
pub use session::{Command, Outcome, StorefrontSession};
pub use visibility::CartVisibility;
