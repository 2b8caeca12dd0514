//! One cart line item, as rendered in the drawer and on the cart page.

use healthfield_commerce::prelude::*;
use leptos::prelude::*;

use crate::cart_ui::CartHandle;

#[component]
pub fn CartItemRow(item: LineItem, cart: CartHandle) -> impl IntoView {
    let id = item.product_id.clone();
    let name = item.name.clone();
    let quantity = item.quantity;

    let decrease = {
        let cart = cart.clone();
        let id = id.clone();
        move |_| cart.set_quantity(&id, quantity - 1)
    };
    let increase = {
        let cart = cart.clone();
        let id = id.clone();
        move |_| cart.set_quantity(&id, quantity + 1)
    };
    let edited = {
        let cart = cart.clone();
        let id = id.clone();
        move |ev| {
            if let Ok(value) = event_target_value(&ev).parse::<i64>() {
                if value > 0 {
                    cart.set_quantity(&id, value);
                }
            }
        }
    };
    let removed = {
        let cart = cart.clone();
        let id = id.clone();
        let name = name.clone();
        move |_| cart.remove(&id, &name)
    };

    view! {
        <article class="cart-item">
            <img class="item-image" src=item.image_url.clone() alt=name.clone() loading="lazy"/>
            <div class="item-details">
                <h3 class="item-name">{name.clone()}</h3>
                {item.category.clone().map(|c| view! { <span class="item-category">{c}</span> })}
                {item
                    .variation
                    .clone()
                    .map(|v| view! { <p class="item-variation">"Variation: " {v}</p> })}
                {if item.in_stock {
                    view! { <p class="stock-status">"In Stock"</p> }.into_any()
                } else {
                    view! { <p class="stock-warning">"Out of Stock"</p> }.into_any()
                }}
            </div>
            <div class="item-pricing">
                <p class="current-price">{item.unit_price.display_code()}</p>
                <div class="quantity-control">
                    <button
                        class="quantity-btn"
                        aria-label="Decrease quantity"
                        disabled={quantity <= 1}
                        on:click=decrease
                    >
                        "\u{2212}"
                    </button>
                    <input
                        class="quantity-input"
                        type="number"
                        min="1"
                        aria-label="Quantity"
                        prop:value=quantity.to_string()
                        on:change=edited
                    />
                    <button class="quantity-btn" aria-label="Increase quantity" on:click=increase>
                        "+"
                    </button>
                </div>
                <button class="remove-btn" on:click=removed>"Remove"</button>
            </div>
        </article>
    }
}
