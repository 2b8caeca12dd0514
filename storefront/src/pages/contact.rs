//! Contact page.

use healthfield_commerce::checkout;
use healthfield_commerce::prelude::*;
use leptos::prelude::*;

use crate::cart_ui::CartHandle;

#[component]
pub fn ContactPage() -> impl IntoView {
    let contact = CartHandle::expect().contact().clone();
    // General-interest message: the empty-cart form of the order formatter.
    let message = format_order(&[], Money::zero(Currency::KES), &contact);
    let chat_link = checkout::order_link(&contact, &message).ok();

    view! {
        <section class="section static-page">
            <h2>"Contact Us"</h2>
            <p>"Moi Avenue, Nairobi"</p>
            <p>"Open Monday to Saturday, 8am - 8pm. Sundays 10am - 6pm."</p>
            <p>"Call or text: 0796 787 207"</p>
            <p>"Email: info@healthfieldpharmacy.co.ke"</p>
            {chat_link
                .map(|href| view! {
                    <a class="btn" href=href target="_blank" rel="noopener noreferrer">
                        "Chat with us on WhatsApp"
                    </a>
                })}
        </section>
    }
}
