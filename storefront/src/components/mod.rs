//! Shared layout components.

mod cart_row;
mod drawer;
mod footer;
mod header;
mod product_card;

pub use cart_row::CartItemRow;
pub use drawer::CartDrawer;
pub use footer::{BottomNav, Footer};
pub use header::Header;
pub use product_card::ProductCard;
