//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
///
/// The catalog is curated content, not a live inventory system: prices and
/// stock flags are whatever the storefront was published with, and the cart
/// snapshots them at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Short description for listings.
    pub description: Option<String>,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price for showing markdowns.
    pub compare_at_price: Option<Money>,
    /// Image URL.
    pub image_url: String,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Pack size or strength discriminator (e.g., "500mg 20s").
    pub variation: Option<String>,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
    /// Whether a prescription must accompany the order.
    pub requires_prescription: bool,
    /// Featured on the best-sellers rail.
    pub top_seller: bool,
    /// Tags for filtering.
    pub tags: Vec<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            price,
            compare_at_price: None,
            image_url: String::new(),
            category_id: category_id.into(),
            variation: None,
            in_stock: true,
            requires_prescription: false,
            top_seller: false,
            tags: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the variation discriminator.
    pub fn with_variation(mut self, variation: impl Into<String>) -> Self {
        self.variation = Some(variation.into());
        self
    }

    /// Set the pre-discount price.
    pub fn with_compare_at_price(mut self, price: Money) -> Self {
        self.compare_at_price = Some(price);
        self
    }

    /// Mark as a best seller.
    pub fn top_seller(mut self) -> Self {
        self.top_seller = true;
        self
    }

    /// Mark as prescription-only.
    pub fn prescription_only(mut self) -> Self {
        self.requires_prescription = true;
        self
    }

    /// Mark as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Check if this product is on sale (has a higher compare-at price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percent(&self) -> Option<u8> {
        self.compare_at_price.and_then(|cap| {
            if cap.amount_cents > self.price.amount_cents && cap.amount_cents > 0 {
                let savings = cap.amount_cents - self.price.amount_cents;
                let percent = (savings as f64 / cap.amount_cents as f64) * 100.0;
                Some(percent.round() as u8)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        Product::new(
            "fludex-c-10s",
            "Fludex-C Tablets 10s",
            "fludex-c-tablets-10s",
            Money::from_major(300, Currency::KES),
            "pharma",
        )
    }

    #[test]
    fn test_product_creation() {
        let p = product();
        assert_eq!(p.id.as_str(), "fludex-c-10s");
        assert!(p.is_available());
        assert!(!p.requires_prescription);
        assert!(p.discount_percent().is_none());
    }

    #[test]
    fn test_product_on_sale() {
        let p = product().with_compare_at_price(Money::from_major(400, Currency::KES));
        assert!(p.is_on_sale());
        assert_eq!(p.discount_percent(), Some(25));
    }

    #[test]
    fn test_discount_requires_higher_compare_at() {
        let p = product().with_compare_at_price(Money::from_major(300, Currency::KES));
        assert!(!p.is_on_sale());
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn test_out_of_stock() {
        let p = product().out_of_stock();
        assert!(!p.is_available());
    }

    #[test]
    fn test_tags_deduplicated() {
        let p = product().with_tag("cold").with_tag("cold").with_tag("flu");
        assert_eq!(p.tags, vec!["cold".to_string(), "flu".to_string()]);
    }
}
