//! End-to-end cart flow: catalog -> store -> persistence -> handoff.

use healthfield_commerce::prelude::*;
use healthfield_storage::{LocalStore, MemoryBackend, StorageBackend};

fn catalog() -> Vec<Product> {
    vec![
        Product::new(
            "fludex-c-10s",
            "Fludex-C Tablets 10s",
            "fludex-c-tablets-10s",
            Money::from_major(300, Currency::KES),
            "pharma",
        )
        .with_description("Cold and flu relief medication."),
        Product::new(
            "swift-hiv-kit",
            "Swift Hiv Kit Cassette",
            "swift-hiv-kit-cassette",
            Money::from_major(300, Currency::KES),
            "non-pharma",
        ),
        Product::new(
            "durex-fetherlite-3s",
            "Durex Fetherlite 3s",
            "durex-fetherlite-3s",
            Money::from_major(650, Currency::KES),
            "non-pharma",
        )
        .with_compare_at_price(Money::from_major(800, Currency::KES)),
    ]
}

#[test]
fn shopping_session_survives_reload() {
    let products = catalog();
    let storage = LocalStore::in_memory();

    // First visit: browse, add, tweak quantities.
    {
        let cart = CartStore::open(storage.clone());
        cart.add_product(&products[0], 1);
        cart.add_product(&products[2], 1);
        cart.add_product(&products[0], 2); // same product again, merges

        assert_eq!(cart.total_units(), 4);
        assert!(cart.set_quantity(&products[2].id, 2));
        assert_eq!(
            cart.subtotal(),
            Money::from_major(3 * 300 + 2 * 650, Currency::KES)
        );
    }

    // Reload: a new store over the same device storage.
    let cart = CartStore::open(storage);
    let snapshot = cart.snapshot();
    assert_eq!(snapshot.unique_item_count(), 2);
    assert_eq!(cart.total_units(), 5);

    // Same ids, same order, same snapshot prices.
    let ids: Vec<&str> = snapshot
        .items()
        .iter()
        .map(|i| i.product_id.as_str())
        .collect();
    assert_eq!(ids, vec!["fludex-c-10s", "durex-fetherlite-3s"]);
    assert_eq!(
        snapshot.items()[1].unit_price,
        Money::from_major(650, Currency::KES)
    );
}

#[test]
fn catalog_price_changes_do_not_reprice_cart() {
    let mut products = catalog();
    let cart = CartStore::open(LocalStore::in_memory());

    cart.add_product(&products[0], 1);

    // The pharmacy republishes the catalog with a new price.
    products[0].price = Money::from_major(450, Currency::KES);
    cart.add_product(&products[0], 1);

    // Two units at the original snapshot price.
    assert_eq!(cart.total_units(), 2);
    assert_eq!(cart.subtotal(), Money::from_major(600, Currency::KES));
}

#[test]
fn handoff_message_reflects_store_state() {
    let products = catalog();
    let cart = CartStore::open(LocalStore::in_memory());
    cart.add_product(&products[0], 2);
    cart.add_product(&products[1], 1);

    let contact = StoreContact::default();
    let snapshot = cart.snapshot();
    let message = format_order(snapshot.items(), cart.subtotal(), &contact);

    assert!(message.contains("*1. Fludex-C Tablets 10s*"));
    assert!(message.contains("*2. Swift Hiv Kit Cassette*"));
    assert!(message.contains("Total Items: 3"));
    assert!(message.contains("*Grand Total: KES 900*"));

    let link = order_link(&contact, &message).unwrap();
    assert!(link.starts_with("https://api.whatsapp.com/send?phone=254796787207&text="));
    // The payload itself is fully percent-encoded.
    assert!(!link.contains(' '));
}

#[test]
fn wiped_storage_means_a_fresh_cart() {
    let backend = MemoryBackend::new();
    backend
        .write(CartStore::DEFAULT_KEY, r#"[{"broken": true}]"#)
        .unwrap();

    let cart = CartStore::open(LocalStore::new(backend));
    assert!(cart.is_empty());
    assert_eq!(cart.totals(), CartTotals::zero(Currency::KES));
}
