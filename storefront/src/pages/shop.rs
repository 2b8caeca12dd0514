//! Product listing pages.

use healthfield_commerce::prelude::*;
use leptos::prelude::*;

use crate::components::ProductCard;
use crate::data;

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="products">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ShopPage() -> impl IntoView {
    view! {
        <section class="section">
            <h2>"All Products"</h2>
            <ProductGrid products=data::products()/>
        </section>
    }
}

#[component]
pub fn BestSellersPage() -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Best Sellers"</h2>
            <p class="section-intro">"What our customers reorder most."</p>
            <ProductGrid products=data::top_sellers()/>
        </section>
    }
}

#[component]
pub fn OffersPage() -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Offers"</h2>
            <p class="section-intro">"Marked-down prices while stocks last."</p>
            <ProductGrid products=data::on_offer()/>
        </section>
    }
}
