//! Device-local persistence for the Healthfield storefront.
//!
//! Everything the storefront remembers between visits lives in a single
//! key-value storage area on the device: in the browser this is
//! `localStorage`, in native builds and tests it is an in-memory map.
//! [`LocalStore`] adds automatic JSON serialization on top of the raw
//! [`StorageBackend`].
//!
//! # Example
//!
//! ```rust
//! use healthfield_storage::LocalStore;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Settings {
//!     dark_mode: bool,
//! }
//!
//! let store = LocalStore::in_memory();
//! store.set("settings", &Settings { dark_mode: true }).unwrap();
//! let settings: Option<Settings> = store.get("settings").unwrap();
//! assert!(settings.unwrap().dark_mode);
//! ```

mod backend;
mod error;
mod store;

pub use backend::{MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use store::LocalStore;

#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorageBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{LocalStore, MemoryBackend, StorageBackend, StorageError};
}
