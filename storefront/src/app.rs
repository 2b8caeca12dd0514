//! Application shell and routes.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::cart_ui::CartHandle;
use crate::components::{BottomNav, CartDrawer, Footer, Header};
use crate::pages::{
    AboutPage, BestSellersPage, CartPage, CategoryPage, ConditionPage, ContactPage, HomePage,
    NotFound, OffersPage, ShopPage,
};
use crate::toast::{Toaster, Toasts};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Order matters: the cart handle reports feedback through the toasts.
    Toasts::provide();
    CartHandle::provide();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta
            name="description"
            content="Healthfield Pharmacy - genuine medicine, wellness essentials and expert advice, delivered"
        />
        <Title text="Healthfield Pharmacy"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/shop") view=ShopPage/>
                    <Route path=path!("/best-sellers") view=BestSellersPage/>
                    <Route path=path!("/offers") view=OffersPage/>
                    <Route path=path!("/categories/:slug") view=CategoryPage/>
                    <Route path=path!("/condition/:slug") view=ConditionPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact-us") view=ContactPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
            <BottomNav/>
            <CartDrawer/>
            <Toaster/>
        </Router>
    }
}
