//! Site header: topbar, main navigation, cart toggle.

use leptos::prelude::*;

use crate::cart_ui::CartHandle;
use crate::data;

#[component]
pub fn Header() -> impl IntoView {
    let cart = CartHandle::expect();
    let count = cart.unit_count();
    let toggle = cart.clone();

    let category_links = data::categories()
        .into_iter()
        .map(|c| view! { <a href=c.route_path()>{c.name.clone()}</a> })
        .collect::<Vec<_>>();
    let condition_links = data::conditions()
        .into_iter()
        .map(|c| view! { <a href=c.route_path()>{c.name.clone()}</a> })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header" role="banner">
            <div class="topbar">
                <span>"Free delivery in Nairobi on orders above KES 2,000"</span>
                <span>"Talk to a pharmacist: 0796 787 207"</span>
            </div>
            <nav class="navbar" aria-label="Main navigation">
                <a class="brand" href="/">"Healthfield Pharmacy"</a>
                <div class="nav-links">
                    <a href="/shop">"Shop"</a>
                    <div class="nav-group">
                        <span class="nav-group-label">"Categories"</span>
                        <div class="nav-dropdown">{category_links}</div>
                    </div>
                    <div class="nav-group">
                        <span class="nav-group-label">"Conditions"</span>
                        <div class="nav-dropdown">{condition_links}</div>
                    </div>
                    <a href="/best-sellers">"Best Sellers"</a>
                    <a href="/offers">"Offers"</a>
                    <a href="/contact-us">"Contact"</a>
                </div>
                <button
                    class="cart-toggle"
                    aria-label="Open cart drawer"
                    on:click=move |_| toggle.toggle_drawer()
                >
                    "Cart"
                    <span class="cart-badge">{move || count.get().to_string()}</span>
                </button>
            </nav>
        </header>
    }
}
