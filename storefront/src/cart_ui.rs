//! Reactive bridge between the shared cart store and the UI surfaces.

use healthfield_commerce::checkout;
use healthfield_commerce::prelude::*;
use healthfield_storage::LocalStore;
use leptos::prelude::*;

use crate::data;
use crate::toast::Toasts;

/// The one cart every surface renders.
///
/// Wraps the shared [`CartStore`] and mirrors its state into a signal via
/// the store's own subscription, so view code stays reactive while all
/// mutation still flows through the store. Components receive the handle
/// through context; nothing reaches for a global.
///
/// Drawer visibility lives here too: it is presentation state, owned by
/// the UI layer, not by the core store.
#[derive(Clone)]
pub struct CartHandle {
    store: CartStore,
    state: RwSignal<CartState>,
    drawer_open: RwSignal<bool>,
    contact: StoreContact,
    toasts: Toasts,
}

impl CartHandle {
    /// Open device storage, hydrate the store, and register the handle in
    /// context. Called once from the application root, after the toast
    /// queue is provided.
    pub fn provide() -> Self {
        let store = CartStore::open(device_store());
        let state = RwSignal::new(store.snapshot());
        store.subscribe(move |next| state.set(next.clone()));

        let handle = Self {
            store,
            state,
            drawer_open: RwSignal::new(false),
            contact: StoreContact::default(),
            toasts: Toasts::expect(),
        };
        provide_context(handle.clone());
        handle
    }

    /// Fetch the handle from context.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Store contact details used for the order handoff.
    pub fn contact(&self) -> &StoreContact {
        &self.contact
    }

    // ------------------------------------------------------------------
    // Reactive reads
    // ------------------------------------------------------------------

    /// Current line items, tracked.
    pub fn items(&self) -> Vec<LineItem> {
        self.state.with(|s| s.items().to_vec())
    }

    /// Unit count as a derived signal, for the header badge.
    pub fn unit_count(&self) -> Signal<i64> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total_units()))
    }

    /// Current subtotal, tracked.
    pub fn subtotal(&self) -> Money {
        self.state.with(|s| s.subtotal())
    }

    /// Whether the cart is empty, tracked.
    pub fn is_empty(&self) -> bool {
        self.state.with(|s| s.is_empty())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add a product and open the drawer so the customer sees it landed.
    pub fn add_product(&self, product: &Product, quantity: i64) {
        let item = LineItem::from_product(product, quantity);
        let item = match data::category_name(&product.category_id) {
            Some(name) => item.with_category(name),
            None => item,
        };
        self.store.add(item);
        self.toasts
            .success(format!("Added \"{}\" to cart", product.name));
        self.open_drawer();
    }

    /// Remove a line item, with feedback naming what was removed.
    pub fn remove(&self, id: &ProductId, name: &str) {
        if self.store.remove(id) {
            self.toasts.info(format!("Removed \"{}\" from cart", name));
        }
    }

    /// Overwrite a line item's quantity. Invalid quantities are silently
    /// rejected by the store; the controls never offer them anyway.
    pub fn set_quantity(&self, id: &ProductId, quantity: i64) {
        self.store.set_quantity(id, quantity);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.store.clear();
        self.toasts.info("Cart cleared");
    }

    // ------------------------------------------------------------------
    // Drawer visibility
    // ------------------------------------------------------------------

    /// Drawer visibility signal, tracked by the drawer component.
    pub fn drawer_open(&self) -> RwSignal<bool> {
        self.drawer_open
    }

    pub fn open_drawer(&self) {
        self.drawer_open.set(true);
    }

    pub fn close_drawer(&self) {
        self.drawer_open.set(false);
    }

    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }

    // ------------------------------------------------------------------
    // Handoff
    // ------------------------------------------------------------------

    /// WhatsApp link carrying the current cart as an order message, or
    /// `None` if the configured number is malformed.
    pub fn checkout_link(&self) -> Option<String> {
        let message = self
            .state
            .with(|s| format_order(s.items(), s.subtotal(), &self.contact));
        checkout::order_link(&self.contact, &message).ok()
    }
}

/// Pick the storage backing for this device: `localStorage` in the
/// browser, in-memory (session-only cart) everywhere else or when the
/// browser blocks storage access.
fn device_store() -> LocalStore {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStore::browser().unwrap_or_else(|_| LocalStore::in_memory())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        LocalStore::in_memory()
    }
}
