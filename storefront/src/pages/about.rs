//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="section static-page">
            <h2>"Our Story"</h2>
            <p>
                "Healthfield Pharmacy started as a single counter on Moi Avenue with a simple \
                 promise: genuine medicine, honest advice, fair prices. The storefront you are \
                 browsing brings that same counter to your phone."
            </p>
            <h3>"Our Mission"</h3>
            <p>
                "To make quality healthcare products accessible to every household we serve, \
                 with a pharmacist always within reach."
            </p>
            <h3>"Our Vision"</h3>
            <p>
                "A community where managing your health is as simple as sending a message."
            </p>
        </section>
    }
}
