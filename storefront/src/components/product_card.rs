//! Product card with add-to-cart.

use healthfield_commerce::prelude::*;
use leptos::prelude::*;

use crate::cart_ui::CartHandle;
use crate::data;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = CartHandle::expect();
    let category = data::category_name(&product.category_id);
    let discount = product.discount_percent();
    let original = product.compare_at_price.map(|m| m.display_code());
    let price = product.price.display_code();
    let in_stock = product.in_stock;

    let add = {
        let cart = cart.clone();
        let product = product.clone();
        move |_| cart.add_product(&product, 1)
    };

    view! {
        <div class="product-card">
            <div class="product-media">
                <img src=product.image_url.clone() alt=product.name.clone() loading="lazy"/>
                {discount.map(|d| view! { <span class="discount-chip">{format!("-{}%", d)}</span> })}
                {product
                    .requires_prescription
                    .then(|| view! { <span class="rx-chip" title="Requires prescription">"Rx"</span> })}
            </div>
            <div class="product-info">
                {category.map(|c| view! { <span class="product-category">{c}</span> })}
                <h3 class="product-name">{product.name.clone()}</h3>
                {product
                    .description
                    .clone()
                    .map(|d| view! { <p class="product-description">{d}</p> })}
                <div class="price-row">
                    <span class="price">{price}</span>
                    {original.map(|o| view! { <span class="original-price">{o}</span> })}
                </div>
                {if in_stock {
                    view! {
                        <button class="btn add-btn" on:click=add>"Add to Cart"</button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button class="btn add-btn" disabled>"Out of Stock"</button>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
