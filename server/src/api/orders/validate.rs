//! Order request validation
//!
//! Ordered checks with first-failure halt. Field checks hand the raw
//! dishes array to the quantity check, which in turn hands validated
//! line-item snapshots to the terminal handler.

use serde_json::Value;

use crate::db::models::{OrderFields, OrderLineItem, OrderPayload, OrderStatus};
use crate::utils::{AppError, AppResult};

/// Field presence checks, in order: deliverTo, mobileNumber, dishes
/// present, dishes a non-empty array.
pub fn data_fields(payload: &OrderPayload) -> AppResult<OrderFields> {
    let deliver_to = require_text(payload.deliver_to.as_deref(), "deliverTo")?;
    let mobile_number = require_text(payload.mobile_number.as_deref(), "mobileNumber")?;

    let Some(dishes) = payload.dishes.as_ref() else {
        return Err(AppError::validation("Order must include a dish"));
    };
    let dishes = match dishes.as_array() {
        Some(items) if !items.is_empty() => items.clone(),
        _ => {
            return Err(AppError::validation(
                "The 'dishes' field needs to be an array",
            ));
        }
    };

    Ok(OrderFields {
        deliver_to,
        mobile_number,
        dishes,
    })
}

/// Every line item needs a positive integer quantity; the first
/// violation halts with the offending index. Passing items become
/// snapshots for the terminal handler.
pub fn quantities(dishes: &[Value]) -> AppResult<Vec<OrderLineItem>> {
    let mut items = Vec::with_capacity(dishes.len());
    for (index, dish) in dishes.iter().enumerate() {
        match dish.get("quantity").and_then(Value::as_i64) {
            Some(quantity) if quantity > 0 => items.push(OrderLineItem::snapshot(dish, quantity)),
            _ => {
                return Err(AppError::validation(format!(
                    "Dish {index} must have a quantity that is an integer greater than 0"
                )));
            }
        }
    }
    Ok(items)
}

/// Status checks for update: present, a known value, and the stored
/// order not already in its terminal state. Moving *to* `delivered` is
/// allowed; once there, nothing moves out.
pub fn status(raw: Option<&str>, current: OrderStatus) -> AppResult<OrderStatus> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Err(AppError::validation("A 'status' field is required"));
    };
    let next = raw.parse::<OrderStatus>().map_err(|_| {
        AppError::validation(
            "Order must have a status of pending, preparing, out-for-delivery, or delivered",
        )
    })?;
    if current.is_terminal() {
        return Err(AppError::state_conflict("A delivered order cannot be changed"));
    }
    Ok(next)
}

/// Status for create: absent defaults to pending, a present value must
/// be a known one.
pub fn initial_status(raw: Option<&str>) -> AppResult<OrderStatus> {
    match raw.filter(|s| !s.is_empty()) {
        None => Ok(OrderStatus::Pending),
        Some(raw) => raw.parse::<OrderStatus>().map_err(|_| {
            AppError::validation(
                "Order must have a status of pending, preparing, out-for-delivery, or delivered",
            )
        }),
    }
}

/// Only a pending order may be deleted
pub fn delete_eligible(current: OrderStatus) -> AppResult<()> {
    if current != OrderStatus::Pending {
        return Err(AppError::state_conflict(
            "Cannot delete an order that is not pending",
        ));
    }
    Ok(())
}

/// An absent, empty or null body id asserts nothing; a present one must
/// match the path id.
pub fn id_matches(path_id: &str, body_id: Option<&str>) -> AppResult<()> {
    match body_id {
        Some(id) if !id.is_empty() && id != path_id => Err(AppError::validation(format!(
            "Body id does not match route id: {id}, {path_id}"
        ))),
        _ => Ok(()),
    }
}

fn require_text(value: Option<&str>, field: &str) -> AppResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::validation(format!("Order must include a {field}"))),
    }
}
