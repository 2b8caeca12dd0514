//! Shopping cart module.
//!
//! The cart is split along the seam the rest of the app cares about:
//! [`CartState`] holds the pure state transitions (no storage, no
//! observers, trivially testable), and [`CartStore`] wraps one shared
//! `CartState` with persistence and change notification for the UI
//! surfaces that render it.

mod item;
mod state;
mod store;
mod totals;

pub use item::LineItem;
pub use state::{CartState, MAX_QUANTITY_PER_ITEM};
pub use store::{CartStore, SubscriptionId};
pub use totals::CartTotals;
