//! Full-page cart view.
//!
//! Renders the same shared store as the drawer and the header badge; all
//! three stay in step because they observe one `CartStore`.

use leptos::prelude::*;

use crate::cart_ui::CartHandle;
use crate::components::CartItemRow;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = CartHandle::expect();
    let count = cart.unit_count();
    let body = cart.clone();

    view! {
        <section class="section cart-page">
            <h2>"Shopping Cart"</h2>
            {move || {
                let cart = body.clone();
                let items = cart.items();
                if items.is_empty() {
                    view! {
                        <div class="empty-cart">
                            <p>"Your cart is empty."</p>
                            <a href="/shop">"Continue shopping"</a>
                        </div>
                    }
                    .into_any()
                } else {
                    let subtotal = cart.subtotal().display_code();
                    let checkout = cart.checkout_link();
                    let clear = cart.clone();
                    let checkout_label = format!("Checkout via WhatsApp ({})", subtotal);
                    view! {
                        <p class="cart-count">{count.get().to_string()} " item(s) in your cart"</p>
                        <div class="cart-list">
                            {items
                                .into_iter()
                                .map(|item| {
                                    let row = cart.clone();
                                    view! { <CartItemRow item cart=row/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="cart-summary">
                            <div class="summary-row">
                                <span>"Subtotal"</span>
                                <strong>{subtotal}</strong>
                            </div>
                            <p class="summary-note">
                                "Delivery and any prescription checks are confirmed in chat."
                            </p>
                            {checkout
                                .map(|href| view! {
                                    <a
                                        class="btn checkout-btn"
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {checkout_label}
                                    </a>
                                })}
                            <div class="cart-actions">
                                <a href="/shop">"Continue Shopping"</a>
                                <button class="clear-btn" on:click=move |_| clear.clear()>
                                    "Clear Cart"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
