//! Type-safe key-value persistence for the Kashoe Chess Club site.
//!
//! Wraps the browser's `localStorage` (or an in-memory map off the browser)
//! with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use kashoe_cache::{BrowserStorage, Cache};
//!
//! let cache = Cache::new(BrowserStorage::local()?);
//!
//! // Store a value
//! cache.set("kashoe:cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartLineItem>> = cache.get("kashoe:cart")?;
//!
//! // Delete a value
//! cache.delete("kashoe:cart")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{BrowserStorage, MemoryStorage, NoStorage, StorageBackend};
pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{BrowserStorage, Cache, CacheError, MemoryStorage, StorageBackend};
}
