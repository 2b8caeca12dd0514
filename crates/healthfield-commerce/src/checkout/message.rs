//! Order message formatting.

use crate::cart::LineItem;
use crate::checkout::StoreContact;
use crate::money::Money;

const SEPARATOR: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Format the cart as a line-structured order message.
///
/// Pure function of `(items, subtotal)`: a header greeting, numbered items
/// with variant, quantity, unit price and line subtotal, a summary with
/// the total unit count and grand total, and a closing line. An empty cart
/// produces a short general-interest message instead.
///
/// Asterisks are the target channel's bold markup.
pub fn format_order(items: &[LineItem], subtotal: Money, contact: &StoreContact) -> String {
    if items.is_empty() {
        return format!("{}\n\nI'm interested in your products.", contact.greeting);
    }

    let mut parts: Vec<String> = vec![
        contact.greeting.clone(),
        format!("I'd like to place an order from *{}*:\n", contact.store_name),
        SEPARATOR.to_string(),
        "*ORDER DETAILS*\n".to_string(),
    ];

    for (index, item) in items.iter().enumerate() {
        parts.push(format!("*{}. {}*", index + 1, item.name));
        if let Some(variation) = &item.variation {
            parts.push(format!("   Variant: {}", variation));
        }
        parts.push(format!(
            "   Qty: {} \u{d7} {}",
            item.quantity,
            item.unit_price.display_code()
        ));
        parts.push(format!("   Subtotal: {}\n", item.line_total().display_code()));
    }

    let total_units: i64 = items.iter().map(|i| i.quantity).sum();

    parts.push(SEPARATOR.to_string());
    parts.push("*SUMMARY*".to_string());
    parts.push(format!("Total Items: {}", total_units));
    parts.push(format!("*Grand Total: {}*", subtotal.display_code()));
    parts.push(format!("{}\n", SEPARATOR));
    parts.push("Please confirm my order and let me know the next steps. Thank you!".to_string());

    parts.join("\n")
}
