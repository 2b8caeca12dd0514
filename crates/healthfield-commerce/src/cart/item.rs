//! Cart line item.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart: one product and how many of it.
///
/// Everything except `quantity` is a snapshot taken when the item was first
/// added. The price in particular is never re-read from the catalog; a
/// later catalog change does not touch carts that already hold the product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Identifier of the underlying product. Unique within the cart.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Quantity, always >= 1.
    pub quantity: i64,
    /// Image URL for display.
    #[serde(default)]
    pub image_url: String,
    /// Category label for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pack size or strength discriminator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Whether the product was in stock at add time.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Pre-discount price for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Discount percentage (0-100) for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
}

fn default_in_stock() -> bool {
    true
}

impl LineItem {
    /// Create a line item. A non-positive quantity is clamped to 1.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity: quantity.max(1),
            image_url: String::new(),
            category: None,
            description: None,
            variation: None,
            in_stock: true,
            original_price: None,
            discount_percent: None,
        }
    }

    /// Snapshot a catalog product into a line item.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: quantity.max(1),
            image_url: product.image_url.clone(),
            category: None,
            description: product.description.clone(),
            variation: product.variation.clone(),
            in_stock: product.in_stock,
            original_price: product.compare_at_price,
            discount_percent: product.discount_percent(),
        }
    }

    /// Set the display category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Total for this row: `unit_price * quantity`, saturating.
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_new_clamps_quantity() {
        let item = LineItem::new("a", "Item A", Money::from_major(100, Currency::KES), 0);
        assert_eq!(item.quantity, 1);

        let item = LineItem::new("a", "Item A", Money::from_major(100, Currency::KES), -5);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("a", "Item A", Money::from_major(300, Currency::KES), 3);
        assert_eq!(item.line_total(), Money::from_major(900, Currency::KES));
    }

    #[test]
    fn test_from_product_snapshots_price_and_discount() {
        let product = Product::new(
            "durex-fetherlite-3s",
            "Durex Fetherlite 3s",
            "durex-fetherlite-3s",
            Money::from_major(650, Currency::KES),
            "non-pharma",
        )
        .with_compare_at_price(Money::from_major(1000, Currency::KES))
        .with_variation("3 pack");

        let item = LineItem::from_product(&product, 2);
        assert_eq!(item.product_id, product.id);
        assert_eq!(item.unit_price, product.price);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.variation.as_deref(), Some("3 pack"));
        assert_eq!(item.original_price, product.compare_at_price);
        assert_eq!(item.discount_percent, Some(35));
    }

    #[test]
    fn test_serde_defaults_for_older_snapshots() {
        // Minimal payload from an earlier storefront version.
        let payload = r#"{
            "product_id": "a",
            "name": "Item A",
            "unit_price": { "amount_cents": 30000, "currency": "KES" },
            "quantity": 2
        }"#;
        let item: LineItem = serde_json::from_str(payload).unwrap();
        assert!(item.in_stock);
        assert_eq!(item.image_url, "");
        assert_eq!(item.category, None);
    }
}
