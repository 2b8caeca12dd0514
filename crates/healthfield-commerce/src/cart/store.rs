//! The shared cart store.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use healthfield_storage::LocalStore;
use tracing::{debug, warn};

use crate::cart::{CartState, CartTotals, LineItem};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&CartState)>;

/// Single source of truth for cart contents.
///
/// One `CartStore` is created when the application starts and handed to
/// every UI surface that renders cart information; cloning the handle
/// shares the same underlying state. All mutation goes through the store's
/// operations, which apply the pure [`CartState`] transition, persist the
/// snapshot best-effort, and notify subscribers.
///
/// The store is deliberately single-threaded (`Rc`, not `Arc`): mutations
/// happen synchronously in response to discrete UI events, so the event
/// queue is the only serialization needed.
#[derive(Clone)]
pub struct CartStore {
    inner: Rc<StoreShared>,
}

struct StoreShared {
    state: RefCell<CartState>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
    next_subscription: Cell<u64>,
    store: LocalStore,
    key: String,
}

impl CartStore {
    /// Storage key the snapshot lives under.
    pub const DEFAULT_KEY: &'static str = "cart_items";

    /// Open a cart store over the given storage, hydrating from the
    /// persisted snapshot if one exists.
    ///
    /// A missing snapshot means a first visit; an unreadable one is
    /// discarded with a warning. Neither is an error: the cart starts
    /// empty and the next successful write replaces whatever was there.
    pub fn open(store: LocalStore) -> Self {
        Self::open_with_key(store, Self::DEFAULT_KEY)
    }

    /// Open with an explicit storage key.
    pub fn open_with_key(store: LocalStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match store.get::<Vec<LineItem>>(&key) {
            Ok(Some(items)) => {
                debug!(items = items.len(), "hydrated cart from storage");
                CartState::from_items(items)
            }
            Ok(None) => CartState::new(),
            Err(err) => {
                warn!("discarding unreadable cart snapshot: {}", err);
                CartState::new()
            }
        };

        Self {
            inner: Rc::new(StoreShared {
                state: RefCell::new(state),
                subscribers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
                store,
                key,
            }),
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add a line item (merging by product id; non-positive quantities
    /// clamp to 1).
    pub fn add(&self, item: LineItem) {
        self.inner.state.borrow_mut().add_item(item);
        self.persist();
        self.notify();
    }

    /// Snapshot a catalog product and add it.
    pub fn add_product(&self, product: &Product, quantity: i64) {
        self.add(LineItem::from_product(product, quantity));
    }

    /// Remove the line item with the given id. No-op if absent.
    pub fn remove(&self, id: &ProductId) -> bool {
        let removed = self.inner.state.borrow_mut().remove_item(id);
        if removed {
            self.persist();
            self.notify();
        }
        removed
    }

    /// Overwrite a line item's quantity. Fails silently for quantities
    /// below 1 or unknown ids.
    pub fn set_quantity(&self, id: &ProductId, quantity: i64) -> bool {
        let changed = self.inner.state.borrow_mut().set_quantity(id, quantity);
        if changed {
            self.persist();
            self.notify();
        }
        changed
    }

    /// Empty the cart unconditionally.
    pub fn clear(&self) {
        self.inner.state.borrow_mut().clear();
        self.persist();
        self.notify();
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Sum of `unit_price * quantity` over current line items.
    pub fn subtotal(&self) -> Money {
        self.inner.state.borrow().subtotal()
    }

    /// Sum of quantities over current line items.
    pub fn total_units(&self) -> i64 {
        self.inner.state.borrow().total_units()
    }

    /// Both derived aggregates in one read.
    pub fn totals(&self) -> CartTotals {
        self.inner.state.borrow().totals()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.state.borrow().is_empty()
    }

    /// A point-in-time copy of the full cart state.
    pub fn snapshot(&self) -> CartState {
        self.inner.state.borrow().clone()
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// Register a callback invoked after every effective mutation with the
    /// new state. The callback may itself mutate the store or change the
    /// subscriber list.
    pub fn subscribe(&self, callback: impl Fn(&CartState) + 'static) -> SubscriptionId {
        let id = self.inner.next_subscription.get();
        self.inner.next_subscription.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id.0);
    }

    /// Persist the current state, keeping the in-memory cart authoritative
    /// when the device refuses the write.
    fn persist(&self) {
        let state = self.inner.state.borrow();
        if let Err(err) = self.inner.store.set(&self.inner.key, &*state) {
            warn!("failed to persist cart, keeping in-memory state: {}", err);
        }
    }

    fn notify(&self) {
        // Snapshot both the state and the subscriber list before calling
        // out, so callbacks can re-enter the store without tripping a
        // RefCell borrow.
        let state = self.snapshot();
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in subscribers {
            callback(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use healthfield_storage::{MemoryBackend, StorageBackend, StorageError};
    use std::cell::Cell;

    fn item(id: &str, major: i64, quantity: i64) -> LineItem {
        LineItem::new(id, id.to_uppercase(), Money::from_major(major, Currency::KES), quantity)
    }

    #[test]
    fn test_open_empty() {
        let cart = CartStore::open(LocalStore::in_memory());
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
        assert_eq!(cart.total_units(), 0);
    }

    #[test]
    fn test_mutations_update_totals() {
        let cart = CartStore::open(LocalStore::in_memory());
        cart.add(item("a", 100, 1));
        cart.add(item("a", 100, 2));
        cart.add(item("b", 50, 1));

        assert_eq!(cart.total_units(), 4);
        assert_eq!(cart.subtotal(), Money::from_major(350, Currency::KES));

        assert!(cart.set_quantity(&"b".into(), 5));
        assert_eq!(cart.subtotal(), Money::from_major(550, Currency::KES));

        assert!(cart.remove(&"a".into()));
        assert_eq!(cart.subtotal(), Money::from_major(250, Currency::KES));

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persists_and_rehydrates() {
        let store = LocalStore::in_memory();
        {
            let cart = CartStore::open(store.clone());
            cart.add(item("a", 300, 2).with_category("Pharma"));
            cart.add(item("b", 650, 1));
        }

        // A fresh store over the same storage sees the same cart.
        let cart = CartStore::open(store);
        let snapshot = cart.snapshot();
        assert_eq!(snapshot.unique_item_count(), 2);
        let ids: Vec<&str> = snapshot.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(cart.subtotal(), Money::from_major(1250, Currency::KES));
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let backend = MemoryBackend::new();
        backend.write(CartStore::DEFAULT_KEY, "{definitely not json").unwrap();

        let cart = CartStore::open(LocalStore::new(backend));
        assert!(cart.is_empty());

        // The store stays usable and overwrites the bad payload.
        cart.add(item("a", 100, 1));
        assert_eq!(cart.total_units(), 1);
    }

    /// Backend that accepts reads but refuses every write.
    struct ReadOnlyBackend;

    impl StorageBackend for ReadOnlyBackend {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        let cart = CartStore::open(LocalStore::new(ReadOnlyBackend));
        let seen = Rc::new(Cell::new(0));
        let seen_cb = Rc::clone(&seen);
        cart.subscribe(move |state| seen_cb.set(state.total_units()));

        cart.add(item("a", 100, 3));

        // Mutation survives and observers still hear about it.
        assert_eq!(cart.total_units(), 3);
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_subscribers_observe_every_mutation() {
        let cart = CartStore::open(LocalStore::in_memory());
        let calls = Rc::new(Cell::new(0u32));
        let calls_cb = Rc::clone(&calls);
        let id = cart.subscribe(move |_| calls_cb.set(calls_cb.get() + 1));

        cart.add(item("a", 100, 1)); // 1
        cart.set_quantity(&"a".into(), 4); // 2
        cart.remove(&"a".into()); // 3
        cart.clear(); // 4, clear always notifies

        assert_eq!(calls.get(), 4);

        cart.unsubscribe(id);
        cart.add(item("b", 100, 1));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_silent_rejections_do_not_notify() {
        let cart = CartStore::open(LocalStore::in_memory());
        cart.add(item("a", 100, 1));

        let calls = Rc::new(Cell::new(0u32));
        let calls_cb = Rc::clone(&calls);
        cart.subscribe(move |_| calls_cb.set(calls_cb.get() + 1));

        assert!(!cart.set_quantity(&"a".into(), 0));
        assert!(!cart.set_quantity(&"ghost".into(), 2));
        assert!(!cart.remove(&"ghost".into()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_subscriber_may_reenter_store() {
        let cart = CartStore::open(LocalStore::in_memory());
        let probe = cart.clone();
        let latest = Rc::new(Cell::new(0));
        let latest_cb = Rc::clone(&latest);
        cart.subscribe(move |_| {
            // Re-entrant read during notification.
            latest_cb.set(probe.total_units());
        });

        cart.add(item("a", 100, 2));
        assert_eq!(latest.get(), 2);
    }
}
