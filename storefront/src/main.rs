mod app;
mod cart_ui;
mod components;
mod data;
mod pages;
mod toast;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
