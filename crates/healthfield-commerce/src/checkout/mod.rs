//! Order handoff.
//!
//! There is no payment or order pipeline: a customer checks out by sending
//! the cart to the pharmacy's WhatsApp line as a formatted message and
//! finishing the order in chat. Formatting is a pure function of the cart
//! contents; opening the chat is the UI's job.

mod message;
mod whatsapp;

pub use message::format_order;
pub use whatsapp::{is_valid_phone, order_link, StoreContact};
