//! Storefront pages.

mod about;
mod cart;
mod category;
mod condition;
mod contact;
mod home;
mod not_found;
mod shop;

pub use about::AboutPage;
pub use cart::CartPage;
pub use category::CategoryPage;
pub use condition::ConditionPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use shop::{BestSellersPage, OffersPage, ProductGrid, ShopPage};
