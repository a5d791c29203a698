//! Cart state and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The part of a catalog product the cart keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image_url: Option<String>,
}

impl CartProduct {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_url: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    /// Catalog product identifier.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Always at least 1 once the item is in a cart.
    pub quantity: i64,
}

impl CartLineItem {
    /// Price times quantity.
    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// The ordered set of items in the cart.
///
/// Serializes as the bare item sequence, which is the snapshot format kept
/// in browser storage. Deserializing normalizes whatever was stored, so a
/// hand-edited or stale snapshot still yields a valid cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line for the same id has its quantity increased; a new
    /// line is appended at the end. Quantities below 1 count as 1.
    pub fn add_item(&mut self, product: CartProduct, quantity: i64) {
        let quantity = quantity.max(1);

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(CartLineItem {
            id: product.id,
            name: product.name,
            price: product.price.non_negative(),
            image_url: product.image_url,
            quantity,
        });
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Update item quantity.
    ///
    /// If quantity is <= 0, removes the item. Returns whether anything changed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take the lines of a placed order out of the cart.
    ///
    /// Each ordered quantity is subtracted from the matching line; lines
    /// that reach zero are removed. Anything added after `ordered` was
    /// captured stays. Returns whether anything changed.
    pub fn settle(&mut self, ordered: &CartState) -> bool {
        let mut changed = false;
        for line in ordered.items() {
            let remaining = match self.get_item(&line.id) {
                Some(item) => item.quantity.saturating_sub(line.quantity),
                None => continue,
            };
            changed |= self.update_quantity(&line.id, remaining);
        }
        changed
    }

    /// Sum of price times quantity over every item.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc.saturating_add(i.subtotal()))
    }

    /// Get total item count (sum of quantities).
    pub fn count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by product ID.
    pub fn get_item(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.id == id)
    }
}

impl From<Vec<CartLineItem>> for CartState {
    fn from(raw: Vec<CartLineItem>) -> Self {
        let mut items: Vec<CartLineItem> = Vec::with_capacity(raw.len());
        for mut item in raw {
            if item.quantity <= 0 {
                continue;
            }
            if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
                continue;
            }
            item.price = item.price.non_negative();
            items.push(item);
        }
        Self { items }
    }
}

impl From<CartState> for Vec<CartLineItem> {
    fn from(state: CartState) -> Self {
        state.items
    }
}
