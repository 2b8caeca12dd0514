//! Site footer and mobile bottom navigation.

use leptos::prelude::*;

use crate::cart_ui::CartHandle;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer" role="contentinfo">
            <div class="footer-columns">
                <div>
                    <h4>"Healthfield Pharmacy"</h4>
                    <p>"Your trusted neighbourhood pharmacy, now online."</p>
                </div>
                <div>
                    <h4>"Quick Links"</h4>
                    <a href="/shop">"Shop"</a>
                    <a href="/best-sellers">"Best Sellers"</a>
                    <a href="/offers">"Offers"</a>
                    <a href="/about">"About Us"</a>
                </div>
                <div>
                    <h4>"Get in Touch"</h4>
                    <p>"Moi Avenue, Nairobi"</p>
                    <p>"info@healthfieldpharmacy.co.ke"</p>
                    <p>"0796 787 207"</p>
                </div>
            </div>
            <p class="footer-note">
                "Healthfield Pharmacy. Licensed by the Pharmacy and Poisons Board."
            </p>
        </footer>
    }
}

#[component]
pub fn BottomNav() -> impl IntoView {
    let cart = CartHandle::expect();
    let count = cart.unit_count();

    view! {
        <nav class="bottom-nav" aria-label="Mobile navigation">
            <a href="/">"Home"</a>
            <a href="/shop">"Shop"</a>
            <a href="/offers">"Offers"</a>
            <a href="/cart">"Cart (" {move || count.get().to_string()} ")"</a>
        </nav>
    }
}
