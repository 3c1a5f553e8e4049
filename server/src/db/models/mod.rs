//! Data Models

pub mod dish;
pub mod order;

// Re-exports
pub use dish::{Dish, DishFields, DishPayload};
pub use order::{Order, OrderFields, OrderLineItem, OrderPayload, OrderStatus, UnknownStatus};
