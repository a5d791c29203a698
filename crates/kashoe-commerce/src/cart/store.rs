//! Observable cart store with persistence.

use crate::cart::{CartLineItem, CartProduct, CartState};
use crate::ids::ProductId;
use crate::money::Money;
use kashoe_cache::{Cache, CacheError, StorageBackend};
use std::fmt;

/// Storage key holding the cart snapshot.
pub const CART_STORAGE_KEY: &str = "kashoe:cart";

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn Fn(&CartState)>;

/// Single source of truth for the cart.
///
/// Every mutation updates the in-memory state, writes a snapshot through
/// the backend and then notifies observers. Storage failures are logged and
/// swallowed: the in-memory state stays authoritative for the session.
pub struct CartStore<B> {
    state: CartState,
    cache: Cache<B>,
    key: String,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl<B: StorageBackend> CartStore<B> {
    /// Open the store under [`CART_STORAGE_KEY`], rehydrating any snapshot.
    pub fn open(backend: B) -> Self {
        Self::open_with_key(backend, CART_STORAGE_KEY)
    }

    /// Open the store under a custom key.
    pub fn open_with_key(backend: B, key: impl Into<String>) -> Self {
        let cache = Cache::new(backend);
        let key = key.into();

        let state = match cache.get::<CartState>(&key) {
            Ok(Some(state)) => {
                tracing::debug!(key = %key, items = state.unique_item_count(), "Rehydrated cart");
                state
            }
            Ok(None) => CartState::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding unreadable cart snapshot");
                CartState::new()
            }
        };

        Self {
            state,
            cache,
            key,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Borrow the current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    pub fn total(&self) -> Money {
        self.state.total()
    }

    pub fn count(&self) -> i64 {
        self.state.count()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn unique_item_count(&self) -> usize {
        self.state.unique_item_count()
    }

    pub fn get_item(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.state.get_item(id)
    }

    /// Storage key this store writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add `quantity` of a product (at least 1).
    pub fn add_item(&mut self, product: CartProduct, quantity: i64) {
        tracing::debug!(product_id = %product.id, quantity, "Adding to cart");
        self.state.add_item(product, quantity);
        self.commit();
    }

    /// Remove an item. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        if self.state.remove_item(id) {
            tracing::debug!(product_id = %id, "Removed from cart");
            self.commit();
        }
    }

    /// Set an item's quantity; `quantity <= 0` removes it.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if self.state.update_quantity(id, quantity) {
            tracing::debug!(product_id = %id, quantity, "Updated cart quantity");
            self.commit();
        }
    }

    /// Empty the cart and drop the stored snapshot.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing cart");
        self.state.clear();
        self.commit();
    }

    /// Remove the lines of a placed order; the snapshot is dropped once
    /// nothing is left.
    pub fn settle(&mut self, ordered: &CartState) {
        if self.state.settle(ordered) {
            tracing::debug!(remaining = self.state.count(), "Settled ordered items");
            self.commit();
        }
    }

    /// Register an observer, called with the new state after each mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&CartState) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Remove an observer. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let len_before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() < len_before
    }

    fn commit(&mut self) {
        if let Err(e) = self.persist() {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist cart");
        }
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }

    fn persist(&self) -> Result<(), CacheError> {
        if self.state.is_empty() {
            self.cache.delete(&self.key)
        } else {
            self.cache.set(&self.key, &self.state)
        }
    }
}

impl<B> fmt::Debug for CartStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kashoe_cache::{MemoryStorage, NoStorage};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn board() -> CartProduct {
        CartProduct::new("board", "Professional Chess Board", Money::from_decimal(3500.0))
    }

    #[test]
    fn test_mutation_writes_snapshot() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(storage.clone());
        store.add_item(board(), 2);

        let raw = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
        let saved: CartState = serde_json::from_str(&raw).unwrap();
        assert_eq!(&saved, store.state());
    }

    #[test]
    fn test_settle_of_whole_cart_removes_key() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(storage.clone());
        store.add_item(board(), 1);
        let ordered = store.snapshot();

        store.settle(&ordered);
        assert!(store.is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_key() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(storage.clone());
        store.add_item(board(), 1);
        store.clear();

        assert!(store.is_empty());
        assert!(!storage.exists(CART_STORAGE_KEY).unwrap());
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let storage = MemoryStorage::new();
        storage.set(CART_STORAGE_KEY, "{{{").unwrap();

        let store = CartStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unavailable_storage_keeps_memory_state() {
        let mut store = CartStore::open(NoStorage);
        store.add_item(board(), 3);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_observers_and_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::open(MemoryStorage::new());

        let sink = seen.clone();
        let sub = store.subscribe(move |state| sink.borrow_mut().push(state.count()));

        store.add_item(board(), 1);
        store.update_quantity(&ProductId::new("board"), 4);
        assert!(store.unsubscribe(sub));
        store.clear();

        assert_eq!(*seen.borrow(), vec![1, 4]);
        assert!(!store.unsubscribe(sub));
    }

    #[test]
    fn test_noop_mutations_do_not_notify() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = CartStore::open(MemoryStorage::new());
        let counter = calls.clone();
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.remove_item(&ProductId::new("missing"));
        store.update_quantity(&ProductId::new("missing"), 2);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open_with_key(storage.clone(), "test:cart");
        store.add_item(board(), 1);

        assert_eq!(store.key(), "test:cart");
        assert!(storage.exists("test:cart").unwrap());
        assert!(!storage.exists(CART_STORAGE_KEY).unwrap());
    }
}
