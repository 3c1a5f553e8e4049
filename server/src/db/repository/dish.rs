//! Dish Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Dish, DishFields};
use crate::db::{MemStore, next_id};

#[derive(Clone)]
pub struct DishRepository {
    store: MemStore,
}

impl DishRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// All dishes in creation order
    pub async fn find_all(&self) -> Vec<Dish> {
        self.store.dishes().read().await.clone()
    }

    /// Find dish by id
    pub async fn find_by_id(&self, id: &str) -> Option<Dish> {
        self.store
            .dishes()
            .read()
            .await
            .iter()
            .find(|dish| dish.id == id)
            .cloned()
    }

    /// Create a new dish with a generated id
    pub async fn create(&self, fields: DishFields) -> Dish {
        let dish = Dish::from_fields(next_id(), fields);
        self.store.dishes().write().await.push(dish.clone());
        dish
    }

    /// Replace the mutable fields of an existing dish, id preserved
    pub async fn update(&self, id: &str, fields: DishFields) -> RepoResult<Dish> {
        let mut dishes = self.store.dishes().write().await;
        let dish = dishes
            .iter_mut()
            .find(|dish| dish.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Dish id not found: {id}")))?;
        dish.apply(fields);
        Ok(dish.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, price: f64) -> DishFields {
        DishFields {
            name: name.to_string(),
            description: "tasty".to_string(),
            price,
            image_url: "https://example.com/img.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = DishRepository::new(MemStore::new());
        let dish = repo.create(fields("Ramen", 11.0)).await;
        assert!(!dish.id.is_empty());

        let found = repo.find_by_id(&dish.id).await.unwrap();
        assert_eq!(found.name, "Ramen");
        assert!(repo.find_by_id("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_find_all_insertion_order() {
        let repo = DishRepository::new(MemStore::new());
        repo.create(fields("First", 1.0)).await;
        repo.create(fields("Second", 2.0)).await;

        let all = repo.find_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1].name, "Second");
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let repo = DishRepository::new(MemStore::new());
        let dish = repo.create(fields("Ramen", 11.0)).await;

        let updated = repo.update(&dish.id, fields("Tonkotsu Ramen", 13.0)).await.unwrap();
        assert_eq!(updated.id, dish.id);
        assert_eq!(updated.name, "Tonkotsu Ramen");

        // The collection was mutated, not appended to
        assert_eq!(repo.find_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = DishRepository::new(MemStore::new());
        let err = repo.update("ghost", fields("x", 1.0)).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(msg) if msg.contains("ghost")));
    }
}
