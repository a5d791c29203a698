//! Typed key-value wrapper with automatic serialization.

use crate::backend::StorageBackend;
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over a [`StorageBackend`].
///
/// Values are stored as JSON text, which is what `localStorage` holds.
#[derive(Debug, Clone)]
pub struct Cache<B> {
    backend: B,
}

impl<B: StorageBackend> Cache<B> {
    /// Wrap a backend.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::new(BrowserStorage::local()?);
    /// ```
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist. A stored value that does not
    /// parse as `T` is an error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<CartState> = cache.get("kashoe:cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.backend.get(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        tracing::debug!(key, bytes = text.len(), "Storing value");
        self.backend.set(key, &text)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        tracing::debug!(key, "Deleting value");
        self.backend.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.backend.exists(key)
    }
}
