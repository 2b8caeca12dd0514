//! WhatsApp handoff link.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Contact details the handoff message and link are built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreContact {
    /// Display name of the store.
    pub store_name: String,
    /// Opening line of the message.
    pub greeting: String,
    /// Business WhatsApp number: digits only, country code included,
    /// no `+` or spaces.
    pub phone: String,
}

impl Default for StoreContact {
    fn default() -> Self {
        Self {
            store_name: "Healthfield Pharmacy".to_string(),
            greeting: "Hello!".to_string(),
            phone: "254796787207".to_string(),
        }
    }
}

/// Validate a WhatsApp number: 10-15 digits, nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    (10..=15).contains(&phone.len()) && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Build the `api.whatsapp.com` link that opens a chat with the message
/// pre-filled.
///
/// Fails only on a malformed phone number in the contact configuration.
pub fn order_link(contact: &StoreContact, message: &str) -> Result<String, CommerceError> {
    if !is_valid_phone(&contact.phone) {
        return Err(CommerceError::ValidationError(format!(
            "invalid WhatsApp number: {}",
            contact.phone
        )));
    }
    Ok(format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        contact.phone,
        encode_component(message)
    ))
}

/// Percent-encode a URL query component (RFC 3986 unreserved set).
fn encode_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
