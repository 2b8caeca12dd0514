//! Condition listing page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data;
use crate::pages::{NotFound, ProductGrid};

#[component]
pub fn ConditionPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            let slug = params.get().get("slug").unwrap_or_default();
            match data::condition_by_slug(&slug) {
                Some(condition) => {
                    let products = data::products_for_condition(&condition.slug);
                    view! {
                        <section class="section">
                            <h2>{condition.name.clone()}</h2>
                            <p class="section-intro">
                                "Products our pharmacists recommend for this condition."
                            </p>
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
