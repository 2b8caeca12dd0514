//! Commerce domain types and cart state for the Healthfield storefront.
//!
//! This crate is the single source of truth for everything the storefront
//! sells and everything the customer has picked:
//!
//! - **Catalog**: products and the navigation taxonomy (categories and
//!   health conditions)
//! - **Cart**: line items, pure state transitions, derived totals, and the
//!   shared observable [`cart::CartStore`]
//! - **Checkout**: the order handoff that turns a cart into a message for
//!   the store's WhatsApp line
//!
//! # Example
//!
//! ```rust
//! use healthfield_commerce::prelude::*;
//! use healthfield_storage::LocalStore;
//!
//! let product = Product::new(
//!     "dulcolax-5mg-100",
//!     "Dulcolax Tablets 5mg 100's",
//!     "dulcolax-tablets-5mg",
//!     Money::from_major(300, Currency::KES),
//!     "pharma",
//! );
//!
//! let cart = CartStore::open(LocalStore::in_memory());
//! cart.add_product(&product, 2);
//!
//! assert_eq!(cart.total_units(), 2);
//! assert_eq!(cart.subtotal(), Money::from_major(600, Currency::KES));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, CategoryKind, Product};

    // Cart
    pub use crate::cart::{
        CartState, CartStore, CartTotals, LineItem, SubscriptionId, MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{format_order, is_valid_phone, order_link, StoreContact};
}
