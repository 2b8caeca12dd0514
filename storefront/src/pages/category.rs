//! Category listing page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data;
use crate::pages::{NotFound, ProductGrid};

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            let slug = params.get().get("slug").unwrap_or_default();
            match data::category_by_slug(&slug) {
                Some(category) => {
                    let products = data::products_in_category(&category.id);
                    view! {
                        <section class="section">
                            <h2>{category.name.clone()}</h2>
                            {category
                                .description
                                .clone()
                                .map(|d| view! { <p class="section-intro">{d}</p> })}
                            <ProductGrid products/>
                        </section>
                    }
                    .into_any()
                }
                None => view! { <NotFound/> }.into_any(),
            }
        }}
    }
}
