//! Shopping cart module.
//!
//! Contains the cart state and line items, plus the persisted, observable
//! store the site shares between pages.

mod cart;
#[cfg(feature = "storage")]
mod store;

pub use cart::{CartLineItem, CartProduct, CartState};
#[cfg(feature = "storage")]
pub use store::{CartStore, Subscription, CART_STORAGE_KEY};
