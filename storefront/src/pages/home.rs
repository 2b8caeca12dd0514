//! Home page and its sections.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::data;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <OffersStrip/>
        <BestSellersRail/>
        <ShopByCategory/>
        <ConditionStrip/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Your pharmacy, delivered"</h1>
            <p>"Genuine medicine, wellness essentials and expert advice from Healthfield Pharmacy."</p>
            <a class="btn" href="/shop">"Browse Products"</a>
        </section>
    }
}

#[component]
fn OffersStrip() -> impl IntoView {
    let offers = data::on_offer().into_iter().take(4).collect::<Vec<_>>();

    view! {
        <section class="section">
            <div class="section-heading">
                <h2>"This Week's Offers"</h2>
                <a class="see-all" href="/offers">"See all offers"</a>
            </div>
            <div class="products">
                {offers
                    .into_iter()
                    .map(|product| view! { <ProductCard product/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn BestSellersRail() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section-heading">
                <h2>"Best Sellers"</h2>
                <a class="see-all" href="/best-sellers">"See all best sellers"</a>
            </div>
            <div class="products">
                {data::top_sellers()
                    .into_iter()
                    .map(|product| view! { <ProductCard product/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ShopByCategory() -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Shop by Category"</h2>
            <div class="category-grid">
                {data::categories()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <a class="category-card" href=category.route_path()>
                                <h3>{category.name.clone()}</h3>
                                {category
                                    .description
                                    .clone()
                                    .map(|d| view! { <p>{d}</p> })}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ConditionStrip() -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Shop by Condition"</h2>
            <div class="condition-links">
                {data::conditions()
                    .into_iter()
                    .map(|condition| {
                        view! {
                            <a class="condition-chip" href=condition.route_path()>
                                {condition.name.clone()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
