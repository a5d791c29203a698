//! Domain types and logic for the Kashoe Chess Club site.
//!
//! This crate provides the pieces the pages share:
//!
//! - **Catalog**: Products, categories, club events, lesson levels
//! - **Cart**: Cart state and the persisted, observable cart store
//! - **Checkout**: Orders, contact/lesson/newsletter forms, submission flows
//!
//! # Example
//!
//! ```rust,ignore
//! use kashoe_commerce::prelude::*;
//! use kashoe_cache::BrowserStorage;
//!
//! // Open the cart, picking up whatever the last visit left behind
//! let mut cart = CartStore::open(BrowserStorage::local()?);
//!
//! // Add a product from the catalog
//! cart.add_item(CartProduct::from(&product), 1);
//!
//! println!("{} items, {}", cart.count(), cart.total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        ClubEvent, EventStatus, LessonLevel, NewEvent, NewProduct, Product, ProductCategory,
    };

    // Cart
    pub use crate::cart::{CartLineItem, CartProduct, CartState};
    #[cfg(feature = "storage")]
    pub use crate::cart::{CartStore, Subscription, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{
        CartAccess, CheckoutForm, ClubGateway, ContactForm, LessonForm, NewsletterForm, Order,
        OrderRequest, SubmitError, SubmitOutcome,
    };
}
