//! The cart shared by every page.

use crate::config::SiteConfig;
use kashoe_cache::{BrowserStorage, NoStorage, StorageBackend};
use kashoe_commerce::cart::{CartLineItem, CartProduct, CartState, CartStore};
use kashoe_commerce::checkout::CartAccess;
use kashoe_commerce::ids::ProductId;
use kashoe_commerce::money::Money;
use leptos::prelude::*;

type SiteCartStore = CartStore<Box<dyn StorageBackend>>;

/// Handle to the one cart store of the page.
///
/// The store lives in the reactive arena; `state` mirrors it so views can
/// subscribe to changes. All mutations go through the store.
#[derive(Clone, Copy)]
pub struct CartHandle {
    store: StoredValue<SiteCartStore, LocalStorage>,
    state: RwSignal<CartState>,
}

impl CartHandle {
    /// Open the cart over `backend` under `key`, rehydrating any snapshot.
    pub fn new(backend: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        let mut store = CartStore::open_with_key(backend, key);
        let state = RwSignal::new(store.snapshot());
        store.subscribe(move |current| {
            state.try_set(current.clone());
        });

        Self {
            store: StoredValue::new_local(store),
            state,
        }
    }

    /// Open the cart over `localStorage` and put it in context.
    ///
    /// Without `localStorage` the cart still works but is lost on reload.
    pub fn provide(config: &SiteConfig) -> Self {
        let backend: Box<dyn StorageBackend> = match BrowserStorage::local() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::warn!(error = %e, "localStorage unavailable, cart will not persist");
                Box::new(NoStorage)
            }
        };

        let handle = Self::new(backend, config.cart_storage_key.clone());
        provide_context(handle);
        handle
    }

    pub fn add(&self, product: CartProduct, quantity: i64) {
        self.store.update_value(|store| store.add_item(product, quantity));
    }

    pub fn remove(&self, id: &ProductId) {
        self.store.update_value(|store| store.remove_item(id));
    }

    pub fn set_quantity(&self, id: &ProductId, quantity: i64) {
        self.store.update_value(|store| store.update_quantity(id, quantity));
    }

    pub fn clear(&self) {
        self.store.update_value(|store| store.clear());
    }

    /// Line items, tracked.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.state.with(|state| state.items().to_vec())
    }

    /// Sum of price times quantity, tracked.
    pub fn total(&self) -> Money {
        self.state.with(CartState::total)
    }

    /// Sum of quantities, tracked.
    pub fn count(&self) -> i64 {
        self.state.with(CartState::count)
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(CartState::is_empty)
    }
}

impl CartAccess for CartHandle {
    fn snapshot(&self) -> CartState {
        self.store
            .try_with_value(SiteCartStore::snapshot)
            .unwrap_or_default()
    }

    fn settle(&self, ordered: &CartState) {
        self.store.try_update_value(|store| store.settle(ordered));
    }
}

/// The cart put in context by [`CartHandle::provide`].
pub fn use_cart() -> CartHandle {
    expect_context::<CartHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kashoe_cache::MemoryStorage;

    fn board() -> CartProduct {
        CartProduct::new("1", "Professional Chess Board", Money::from_decimal(3500.0))
    }

    #[test]
    fn test_mutations_reach_the_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let cart = CartHandle::new(Box::new(MemoryStorage::new()), "kashoe:cart");
            cart.add(board(), 1);
            cart.add(board(), 1);
            assert_eq!(cart.count(), 2);
            assert_eq!(cart.total(), Money::from_decimal(7000.0));

            cart.set_quantity(&ProductId::new("1"), 0);
            assert!(cart.is_empty());
        });
    }

    #[test]
    fn test_rehydrates_from_backend() {
        let owner = Owner::new();
        owner.with(|| {
            let storage = MemoryStorage::new();
            let first = CartHandle::new(Box::new(storage.clone()), "kashoe:cart");
            first.add(board(), 3);

            let second = CartHandle::new(Box::new(storage), "kashoe:cart");
            assert_eq!(second.count(), 3);
            assert_eq!(second.items()[0].name, "Professional Chess Board");
        });
    }

    #[test]
    fn test_cart_access_settles_store() {
        let owner = Owner::new();
        owner.with(|| {
            let cart = CartHandle::new(Box::new(NoStorage), "kashoe:cart");
            cart.add(board(), 2);
            let ordered = CartAccess::snapshot(&cart);
            assert_eq!(ordered.count(), 2);

            cart.add(CartProduct::new("2", "Chess Cap", Money::from_decimal(500.0)), 1);
            CartAccess::settle(&cart, &ordered);
            assert_eq!(cart.count(), 1);
            assert_eq!(cart.items()[0].name, "Chess Cap");

            cart.clear();
            assert!(cart.is_empty());
        });
    }
}
