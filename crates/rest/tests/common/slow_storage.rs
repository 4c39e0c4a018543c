//! A storage backend that takes longer than any test timeout to answer.

use std::time::Duration;

use async_trait::async_trait;
use restaurants_persistence::core::RestaurantStorage;
use restaurants_persistence::error::StorageResult;
use restaurants_persistence::types::{Restaurant, RestaurantPatch, StoredRestaurant};

/// Storage that sleeps before every answer.
#[derive(Debug, Clone, Copy)]
pub struct SlowStorage {
    delay: Duration,
}

impl SlowStorage {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn stall(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait]
impl RestaurantStorage for SlowStorage {
    fn backend_name(&self) -> &'static str {
        "slow"
    }

    async fn create(&self, restaurant: Restaurant) -> StorageResult<StoredRestaurant> {
        self.stall().await;
        Ok(StoredRestaurant::new("slow-1", restaurant))
    }

    async fn create_batch(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> StorageResult<Vec<StoredRestaurant>> {
        self.stall().await;
        Ok(restaurants
            .into_iter()
            .enumerate()
            .map(|(i, r)| StoredRestaurant::new(format!("slow-{}", i + 1), r))
            .collect())
    }

    async fn read(&self, _id: &str) -> StorageResult<Option<StoredRestaurant>> {
        self.stall().await;
        Ok(None)
    }

    async fn list(&self) -> StorageResult<Vec<StoredRestaurant>> {
        self.stall().await;
        Ok(Vec::new())
    }

    async fn update(&self, id: &str, _patch: RestaurantPatch) -> StorageResult<StoredRestaurant> {
        self.stall().await;
        Err(restaurants_persistence::StorageError::not_found(id))
    }

    async fn delete(&self, _id: &str) -> StorageResult<()> {
        self.stall().await;
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        self.stall().await;
        Ok(0)
    }
}
