//! Raw string storage backends.

use crate::CacheError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A string key-value area that survives page reloads.
///
/// Implementations are single-threaded: the browser storage they model is
/// only reachable from the UI thread.
pub trait StorageBackend {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove a value. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key is present.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory backend.
///
/// Clones share the same map, so a test can keep one handle to inspect
/// what another handle wrote. An optional byte quota mimics the browser's
/// storage limit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that refuses writes past `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Rc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(CacheError::StoreError(format!(
                    "quota exceeded: {} of {} bytes",
                    needed, quota
                )));
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The browser profile's `localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    #[cfg(target_arch = "wasm32")]
    storage: web_sys::Storage,
    #[cfg(not(target_arch = "wasm32"))]
    fallback: MemoryStorage,
}

impl BrowserStorage {
    /// Open `window.localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn local() -> Result<Self, CacheError> {
        let window = web_sys::window()
            .ok_or_else(|| CacheError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| CacheError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }

    // Non-WASM stand-in for development/testing
    #[cfg(not(target_arch = "wasm32"))]
    pub fn local() -> Result<Self, CacheError> {
        Ok(Self {
            fallback: MemoryStorage::new(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage
            .get_item(key)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.fallback.set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.fallback.delete(key)
    }
}

/// A backend that is always unavailable.
///
/// Used when `localStorage` cannot be opened: every write fails and the
/// caller keeps working from memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl StorageBackend for NoStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("no persistent storage".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Ok(())
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(store.exists("k").unwrap());

        store.delete("k").unwrap();
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set("cart", "[]").unwrap();
        assert_eq!(b.get("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_memory_storage_quota() {
        let store = MemoryStorage::with_quota(10);
        store.set("k", "12345").unwrap();
        // Replacing an entry only counts the new value.
        store.set("k", "123456789").unwrap();
        assert!(matches!(
            store.set("other", "x"),
            Err(CacheError::StoreError(_))
        ));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("123456789"));
    }

    #[test]
    fn test_delete_missing_key_is_ok() {
        assert!(MemoryStorage::new().delete("missing").is_ok());
    }

    #[test]
    fn test_no_storage_rejects_writes() {
        assert!(NoStorage.set("k", "v").is_err());
        assert_eq!(NoStorage.get("k").unwrap(), None);
    }

    #[test]
    fn test_browser_storage_native_fallback() {
        let store = BrowserStorage::local().unwrap();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
