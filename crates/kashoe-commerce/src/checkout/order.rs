//! Order types.

use crate::cart::{CartLineItem, CartState};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status as tracked by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting M-Pesa payment.
    #[default]
    Pending,
    Paid,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// One line of an order, as the backend expects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    /// Unit price.
    pub price: Money,
}

impl From<&CartLineItem> for OrderItem {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.id.clone(),
            product_name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    /// M-Pesa number, `254XXXXXXXXX`.
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
}

impl OrderRequest {
    /// Build an order from customer details and the current cart.
    ///
    /// The total is the cart total at the time of the call.
    pub fn from_cart(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        customer_phone: impl Into<String>,
        cart: &CartState,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        Ok(Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: customer_phone.into(),
            items: cart.items().iter().map(OrderItem::from).collect(),
            total_amount: cart.total(),
        })
    }

    /// Sum of quantities over the order lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    #[serde(default)]
    pub status: OrderStatus,
    /// Filled in once the M-Pesa payment is confirmed.
    #[serde(default)]
    pub mpesa_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartProduct;

    fn cart() -> CartState {
        let mut cart = CartState::new();
        cart.add_item(
            CartProduct::new("board", "Professional Chess Board", Money::from_decimal(3500.0)),
            1,
        );
        cart.add_item(
            CartProduct::new(ProductId::new("7"), "Kashoe Chess Club Cap", Money::from_decimal(500.0)),
            2,
        );
        cart
    }

    #[test]
    fn test_order_from_cart() {
        let order = OrderRequest::from_cart("Amina", "amina@example.com", "254712345678", &cart())
            .unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total_amount, Money::from_decimal(4500.0));
        assert_eq!(order.items[1].product_name, "Kashoe Chess Club Cap");
    }

    #[test]
    fn test_order_from_empty_cart() {
        let result = OrderRequest::from_cart("Amina", "amina@example.com", "254712345678", &CartState::new());
        assert_eq!(result, Err(CommerceError::EmptyCart));
    }

    #[test]
    fn test_order_wire_format() {
        let order = OrderRequest::from_cart("Amina", "amina@example.com", "254712345678", &cart())
            .unwrap();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["customer_phone"], "254712345678");
        assert_eq!(json["total_amount"], 4500.0);
        assert_eq!(
            json["items"][0],
            serde_json::json!({
                "product_id": "board",
                "product_name": "Professional Chess Board",
                "quantity": 1,
                "price": 3500.0
            })
        );
    }

    #[test]
    fn test_order_response() {
        let json = r#"{
            "id": "0b6f",
            "customer_name": "Amina",
            "customer_email": "amina@example.com",
            "customer_phone": "254712345678",
            "items": [],
            "total_amount": 4500.0,
            "status": "pending",
            "mpesa_reference": null,
            "created_at": "2025-05-01T10:00:00Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.status.is_terminal());
        assert_eq!(order.id.as_str(), "0b6f");
    }
}
