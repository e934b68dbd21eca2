//! Order model as returned by the detailed order listing.

use bodega_core::{OrderId, OrderStatus, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Entity;
use crate::table::{FieldValue, TableRow};

/// The customer subset embedded on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub address: String,
}

/// One ordered line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Reference to the ordered product.
    #[serde(rename = "productID")]
    pub product: ProductId,
    /// Product name snapshot taken at order time.
    #[serde(rename = "productName")]
    pub name: String,
    pub quantity: u32,
    /// Unit price charged.
    pub price: Decimal,
    /// Unit price before any discount.
    #[serde(rename = "originalPrice")]
    pub original_price: Decimal,
    /// Server-computed `price * quantity`.
    #[serde(rename = "lineTotal")]
    pub line_total: Decimal,
}

/// A customer order.
///
/// `total` is fixed at creation time as the sum of line totals; the
/// dashboard never recomputes it after discount or cancellation edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned, human-meaningful identifier (e.g. `ORD123`).
    #[serde(rename = "orderID")]
    pub id: OrderId,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub customer: Customer,
    #[serde(rename = "products")]
    pub items: Vec<LineItem>,
    #[serde(rename = "totalAmount")]
    pub total: Decimal,
    pub status: OrderStatus,
    #[serde(rename = "isCancelled", default)]
    pub cancelled: bool,
}

impl Order {
    /// Sum of the server-computed line totals.
    #[must_use]
    pub fn line_total_sum(&self) -> Decimal {
        self.items.iter().map(|item| item.line_total).sum()
    }
}

/// Response shape of the detailed order listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    #[serde(rename = "totalOrders")]
    pub total_orders: u64,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

impl TableRow for Order {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::text(self.id.as_str())),
            "customer" => Some(FieldValue::text(&self.customer.name)),
            "date" => Some(FieldValue::Timestamp(self.created_at)),
            "total" => Some(FieldValue::Number(self.total)),
            "status" => Some(FieldValue::text(self.status.label())),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        serde_json::from_value(serde_json::json!({
            "orderID": "ORD123",
            "createdAt": "2025-11-04T09:30:00Z",
            "customer": {
                "name": "John Smith",
                "contact": "+1-555-0100",
                "address": "12 Elm St"
            },
            "products": [
                {
                    "productID": "prd-1",
                    "productName": "Oat Milk",
                    "quantity": 2,
                    "price": "4.50",
                    "originalPrice": "5.00",
                    "lineTotal": "9.00"
                },
                {
                    "productID": "prd-2",
                    "productName": "Coffee Beans",
                    "quantity": 1,
                    "price": "9.25",
                    "originalPrice": "9.25",
                    "lineTotal": "9.25"
                }
            ],
            "totalAmount": "18.25",
            "status": "Order Placed"
        }))
        .expect("deserialize order")
    }

    #[test]
    fn test_wire_field_names() {
        let order = sample_order();
        assert_eq!(order.id, OrderId::new("ORD123"));
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.items.len(), 2);
        assert!(!order.cancelled);
    }

    #[test]
    fn test_total_matches_line_total_sum_at_creation() {
        let order = sample_order();
        assert_eq!(order.line_total_sum(), order.total);
    }

    #[test]
    fn test_orders_page_shape() {
        let page: OrdersPage = serde_json::from_value(serde_json::json!({
            "orders": [],
            "totalOrders": 42
        }))
        .expect("deserialize page");
        assert!(page.orders.is_empty());
        assert_eq!(page.total_orders, 42);
    }

    #[test]
    fn test_table_fields() {
        let order = sample_order();
        assert_eq!(
            order.field("customer").map(|v| v.display().into_owned()),
            Some("John Smith".to_string())
        );
        assert_eq!(
            order.field("status").map(|v| v.display().into_owned()),
            Some("Order Placed".to_string())
        );
        assert!(order.field("nonexistent").is_none());
    }
}
