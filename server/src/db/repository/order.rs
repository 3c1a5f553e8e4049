//! Order Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Order, OrderFields, OrderLineItem, OrderStatus};
use crate::db::{MemStore, next_id};

#[derive(Clone)]
pub struct OrderRepository {
    store: MemStore,
}

impl OrderRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// All orders in creation order
    pub async fn find_all(&self) -> Vec<Order> {
        self.store.orders().read().await.clone()
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> Option<Order> {
        self.store
            .orders()
            .read()
            .await
            .iter()
            .find(|order| order.id == id)
            .cloned()
    }

    /// Create a new order with a generated id
    ///
    /// Every submitted line item is persisted.
    pub async fn create(
        &self,
        fields: OrderFields,
        status: OrderStatus,
        dishes: Vec<OrderLineItem>,
    ) -> Order {
        let order = Order::from_parts(next_id(), fields, status, dishes);
        self.store.orders().write().await.push(order.clone());
        order
    }

    /// Replace the mutable fields of an existing order, id preserved
    pub async fn update(
        &self,
        id: &str,
        fields: OrderFields,
        status: OrderStatus,
        dishes: Vec<OrderLineItem>,
    ) -> RepoResult<Order> {
        let mut orders = self.store.orders().write().await;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Order id not found: {id}")))?;
        order.apply(fields, status, dishes);
        Ok(order.clone())
    }

    /// Remove an order from the collection by position
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let mut orders = self.store.orders().write().await;
        let index = orders
            .iter()
            .position(|order| order.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Order id not found: {id}")))?;
        orders.remove(index);
        Ok(())
    }
}
