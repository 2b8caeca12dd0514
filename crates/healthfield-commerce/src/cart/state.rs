//! Pure cart state transitions.

use crate::cart::{CartTotals, LineItem};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// The ordered collection of line items.
///
/// All mutation logic lives here as plain state transitions with no side
/// effects; [`crate::cart::CartStore`] layers persistence and notification
/// on top. Serializes transparently as a JSON array of line items, which is
/// exactly the persisted snapshot format.
///
/// Invariants, upheld by every operation:
/// - `product_id` is unique across rows (duplicates merge by quantity)
/// - every `quantity` is between 1 and [`MAX_QUANTITY_PER_ITEM`]
/// - insertion order is stable across reads
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a persisted snapshot, re-establishing
    /// invariants: duplicate rows merge, out-of-range quantities clamp.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut state = Self::new();
        for item in items {
            state.add_item(item);
        }
        state
    }

    /// The line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Add an item to the cart.
    ///
    /// A non-positive quantity is clamped to 1 before insertion. If a line
    /// item with the same product id already exists, its quantity increases
    /// by the given amount (saturating at [`MAX_QUANTITY_PER_ITEM`]) and
    /// the originally stored snapshot fields win; nothing else about the
    /// existing row changes.
    pub fn add_item(&mut self, item: LineItem) {
        let quantity = item.quantity.clamp(1, MAX_QUANTITY_PER_ITEM);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(MAX_QUANTITY_PER_ITEM);
            return;
        }

        let mut item = item;
        item.quantity = quantity;
        self.items.push(item);
    }

    /// Remove the line item with the given id.
    ///
    /// Returns false (and changes nothing) if the id is not present.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != id);
        self.items.len() < len_before
    }

    /// Overwrite the quantity of a line item.
    ///
    /// Fails silently (returns false, state unchanged) when the quantity is
    /// below 1 or above [`MAX_QUANTITY_PER_ITEM`], or when no line item has
    /// the id. Driving a row to zero is not possible here; removal is its
    /// own operation.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if !(1..=MAX_QUANTITY_PER_ITEM).contains(&quantity) {
            return false;
        }
        match self.items.iter_mut().find(|i| &i.product_id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * quantity` over all line items.
    ///
    /// Always recomputed from the rows, never cached, so it cannot drift.
    pub fn subtotal(&self) -> Money {
        let currency = self
            .items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or(Currency::default());
        self.items.iter().fold(Money::zero(currency), |acc, item| {
            acc.saturating_add_amount(item.line_total().amount_cents)
        })
    }

    /// Sum of quantities over all line items.
    pub fn total_units(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Both derived aggregates in one read.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            total_units: self.total_units(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn item(id: &str, major: i64, quantity: i64) -> LineItem {
        LineItem::new(id, id.to_uppercase(), Money::from_major(major, Currency::KES), quantity)
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, 1));
        cart.add_item(item("a", 100, 2));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 3);
        assert_eq!(cart.subtotal(), Money::from_major(300, Currency::KES));
    }

    #[test]
    fn test_add_keeps_original_snapshot() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, 1));

        // Second add carries a different price; the stored snapshot wins.
        cart.add_item(item("a", 250, 1));

        let row = cart.get(&"a".into()).unwrap();
        assert_eq!(row.quantity, 2);
        assert_eq!(row.unit_price, Money::from_major(100, Currency::KES));
        assert_eq!(cart.subtotal(), Money::from_major(200, Currency::KES));
    }

    #[test]
    fn test_add_clamps_non_positive_quantity() {
        let mut cart = CartState::new();
        let mut bad = item("a", 100, 1);
        bad.quantity = -3;
        cart.add_item(bad);

        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, 1));
        cart.add_item(item("b", 200, 1));
        cart.add_item(item("c", 300, 1));
        cart.add_item(item("b", 200, 1)); // merge, must not reorder

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quantity_saturates_at_cap() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, MAX_QUANTITY_PER_ITEM));
        cart.add_item(item("a", 100, 5));

        assert_eq!(cart.get(&"a".into()).unwrap().quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartState::new();
        cart.add_item(item("c", 10, 1));

        assert!(cart.remove_item(&"c".into()));
        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, 1));
        let before = cart.clone();

        assert!(!cart.remove_item(&"ghost".into()));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartState::new();
        cart.add_item(item("b", 50, 1));

        assert!(cart.set_quantity(&"b".into(), 5));
        assert_eq!(cart.get(&"b".into()).unwrap().quantity, 5);
        assert_eq!(cart.subtotal(), Money::from_major(250, Currency::KES));
    }

    #[test]
    fn test_set_quantity_rejects_below_one() {
        let mut cart = CartState::new();
        cart.add_item(item("b", 50, 2));
        let before = cart.clone();

        assert!(!cart.set_quantity(&"b".into(), 0));
        assert!(!cart.set_quantity(&"b".into(), -1));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_rejects_missing_id() {
        let mut cart = CartState::new();
        let before = cart.clone();

        assert!(!cart.set_quantity(&"ghost".into(), 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, 2));
        cart.add_item(item("b", 200, 1));
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.subtotal().is_zero());
        assert_eq!(cart.total_units(), 0);
    }

    #[test]
    fn test_subtotal_never_drifts() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, 1));
        cart.add_item(item("b", 50, 4));
        cart.set_quantity(&"a".into(), 3);
        cart.remove_item(&"b".into());
        cart.add_item(item("c", 10, 2));

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.unit_price.amount_cents * i.quantity)
            .sum();
        assert_eq!(cart.subtotal().amount_cents, expected);
        assert_eq!(cart.total_units(), 5);
    }

    #[test]
    fn test_from_items_restores_invariants() {
        // A tampered snapshot: duplicate rows and a zero quantity.
        let items = vec![item("a", 100, 2), item("a", 100, 3), {
            let mut i = item("b", 50, 1);
            i.quantity = 0;
            i
        }];
        let cart = CartState::from_items(items);

        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.get(&"a".into()).unwrap().quantity, 5);
        assert_eq!(cart.get(&"b".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut cart = CartState::new();
        cart.add_item(item("a", 100, 1).with_category("Pharma"));
        cart.add_item(item("b", 50, 4));

        let payload = serde_json::to_string(&cart).unwrap();
        let restored: CartState = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored, cart);

        // The payload is a bare array of line items.
        assert!(payload.starts_with('['));
    }
}
