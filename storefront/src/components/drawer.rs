//! Slide-in cart drawer.
//!
//! Mounted once at the application root; visibility is driven by the
//! handle's drawer signal. Opens on the header toggle or automatically
//! after an add; closes on the close button, a click on the overlay, or
//! Escape.

use leptos::ev;
use leptos::prelude::*;

use crate::cart_ui::CartHandle;
use crate::components::CartItemRow;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart = CartHandle::expect();
    let open = cart.drawer_open();

    let esc = cart.clone();
    window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            esc.close_drawer();
        }
    });

    let overlay = cart.clone();
    let close = cart.clone();
    let count = cart.unit_count();
    let body = cart.clone();

    view! {
        <div
            class="drawer-overlay"
            class:visible=move || open.get()
            on:click=move |_| overlay.close_drawer()
        ></div>
        <aside class="cart-drawer" class:open=move || open.get() role="dialog" aria-label="Shopping cart">
            <header class="drawer-header">
                <h2 class="drawer-title">"Cart (" {move || count.get().to_string()} ")"</h2>
                <button
                    class="icon-btn"
                    aria-label="Close cart drawer"
                    on:click=move |_| close.close_drawer()
                >
                    "\u{2715}"
                </button>
            </header>
            {move || {
                let cart = body.clone();
                let items = cart.items();
                if items.is_empty() {
                    view! {
                        <div class="empty-cart">
                            <h3>"Your cart is empty"</h3>
                            <p>"Add some items to get started"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    let subtotal = cart.subtotal().display_code();
                    let checkout = cart.checkout_link();
                    let clear = cart.clone();
                    let checkout_label = format!("Checkout ({})", subtotal);
                    view! {
                        <div class="drawer-content">
                            {items
                                .into_iter()
                                .map(|item| {
                                    let row = cart.clone();
                                    view! { <CartItemRow item cart=row/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="drawer-summary">
                            <div class="summary-row">
                                <span>"Subtotal"</span>
                                <strong>{subtotal}</strong>
                            </div>
                            {checkout
                                .map(|href| view! {
                                    <a
                                        class="btn checkout-btn"
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Proceed to checkout"
                                    >
                                        {checkout_label}
                                    </a>
                                })}
                            <button class="clear-btn" aria-label="Clear cart" on:click=move |_| clear.clear()>
                                "Clear Cart"
                            </button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </aside>
    }
}
