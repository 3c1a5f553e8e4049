//! Storage layer
//!
//! Process-lifetime, in-memory collections. There is no database: the
//! dish and order collections live for as long as the server process and
//! are reached only through the repositories in [`repository`].

pub mod models;
pub mod repository;

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use models::{Dish, Order};

/// In-memory store holding both resource collections
///
/// Collections are insertion-ordered: `list` returns records in creation
/// order and `delete` removes by position, so a `Vec` behind an async
/// `RwLock` is the right container. Cloning shares the underlying
/// collections.
#[derive(Clone, Default)]
pub struct MemStore {
    dishes: Arc<RwLock<Vec<Dish>>>,
    orders: Arc<RwLock<Vec<Order>>>,
}

impl MemStore {
    /// Create a store with empty collections
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn dishes(&self) -> &RwLock<Vec<Dish>> {
        &self.dishes
    }

    pub(crate) fn orders(&self) -> &RwLock<Vec<Order>> {
        &self.orders
    }
}

/// Generate a fresh unique identifier for a new record
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
