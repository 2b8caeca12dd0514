//! 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="section not-found">
            <h2>"404 \u{2014} Page Not Found"</h2>
            <p>"The page you are looking for does not exist or may have been moved."</p>
            <a href="/">"Back to Home"</a>
        </section>
    }
}
