//! Order Model
//!
//! An order references dishes through line-item snapshots: the dish
//! fields are copied into the order at submission time, so later menu
//! edits never rewrite order history.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Order lifecycle status
///
/// `pending`, `preparing` and `out-for-delivery` may move to any other
/// listed value; `delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// All statuses an order may carry, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        Self::Pending,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Wire representation of this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }

    /// Whether no further status change is permitted
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A delivery order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, immutable once created
    pub id: String,
    /// Delivery address
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    /// Contact number for the courier
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub status: OrderStatus,
    /// Line items, never empty
    pub dishes: Vec<OrderLineItem>,
}

/// A dish snapshot plus the requested quantity
///
/// Only `quantity` is guaranteed by validation; the snapshot fields are
/// carried when the client supplied them and omitted from JSON otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Requested quantity, a positive integer
    pub quantity: i64,
}

impl OrderLineItem {
    /// Snapshot a wire line item whose quantity has already been
    /// validated
    pub fn snapshot(value: &Value, quantity: i64) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };
        Self {
            id: text("id"),
            name: text("name"),
            description: text("description"),
            image_url: text("image_url"),
            price: value.get("price").and_then(Value::as_f64),
            quantity,
        }
    }
}

/// Raw wire payload for order create/update
///
/// `dishes` stays an untyped JSON value so the validation chain can
/// distinguish "missing" from "not an array" and walk the elements with
/// per-index quantity checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPayload {
    pub id: Option<String>,
    #[serde(rename = "deliverTo")]
    pub deliver_to: Option<String>,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: Option<String>,
    pub status: Option<String>,
    pub dishes: Option<Value>,
}

/// The validated field set shared by order create and update
///
/// `dishes` holds the raw array elements; the quantity check turns them
/// into [`OrderLineItem`] snapshots.
#[derive(Debug, Clone)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Value>,
}

impl Order {
    /// Build an order from validated parts and a generated id
    pub fn from_parts(
        id: String,
        fields: OrderFields,
        status: OrderStatus,
        dishes: Vec<OrderLineItem>,
    ) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status,
            dishes,
        }
    }

    /// Replace the mutable fields in place; the id is preserved
    pub fn apply(&mut self, fields: OrderFields, status: OrderStatus, dishes: Vec<OrderLineItem>) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.status = status;
        self.dishes = dishes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"out-for-delivery\""
        );
        let status: OrderStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "out-for-delivery".parse::<OrderStatus>(),
            Ok(OrderStatus::OutForDelivery)
        );
        assert_eq!(
            "shipped".parse::<OrderStatus>(),
            Err(UnknownStatus("shipped".to_string()))
        );
    }

    #[test]
    fn test_status_terminality() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
    }

    #[test]
    fn test_line_item_snapshot_full() {
        let value = json!({
            "id": "d1",
            "name": "Pad Thai",
            "description": "Rice noodles",
            "image_url": "https://example.com/p.png",
            "price": 12.5,
            "quantity": 2
        });
        let item = OrderLineItem::snapshot(&value, 2);
        assert_eq!(item.id.as_deref(), Some("d1"));
        assert_eq!(item.price, Some(12.5));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_line_item_snapshot_sparse() {
        // Clients may submit just an id and a quantity
        let value = json!({"id": "1", "quantity": 2});
        let item = OrderLineItem::snapshot(&value, 2);
        assert_eq!(item.id.as_deref(), Some("1"));
        assert!(item.name.is_none());

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, json!({"id": "1", "quantity": 2}));
    }

    #[test]
    fn test_order_wire_field_names() {
        let order = Order {
            id: "o1".to_string(),
            deliver_to: "221B Baker Street".to_string(),
            mobile_number: "555-0100".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![OrderLineItem::snapshot(&json!({"quantity": 1}), 1)],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["deliverTo"], "221B Baker Street");
        assert_eq!(json["mobileNumber"], "555-0100");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn test_apply_preserves_id() {
        let mut order = Order {
            id: "o1".to_string(),
            deliver_to: "A".to_string(),
            mobile_number: "1".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![OrderLineItem::snapshot(&json!({"quantity": 1}), 1)],
        };
        order.apply(
            OrderFields {
                deliver_to: "B".to_string(),
                mobile_number: "2".to_string(),
                dishes: vec![],
            },
            OrderStatus::Preparing,
            vec![OrderLineItem::snapshot(&json!({"quantity": 3}), 3)],
        );
        assert_eq!(order.id, "o1");
        assert_eq!(order.deliver_to, "B");
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.dishes[0].quantity, 3);
    }
}
