//! Core restaurant storage trait.
//!
//! This module defines the [`RestaurantStorage`] trait, which provides the
//! document store operations the REST layer is built on.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Restaurant, RestaurantPatch, StoredRestaurant};

/// Core storage trait for restaurant documents.
///
/// # Identity
///
/// `create` always assigns a fresh identifier; callers cannot choose one.
/// Identifiers are unique even under concurrent creation.
///
/// # Atomicity
///
/// Every mutating operation touches a single document and is applied
/// completely or not at all. There are no multi-document guarantees.
///
/// # Deletes
///
/// `delete` is a hard delete. A deleted id reads back as `None`.
///
/// # Example
///
/// ```ignore
/// use restaurants_persistence::core::RestaurantStorage;
/// use restaurants_persistence::types::{Restaurant, RestaurantPatch};
///
/// async fn example<S: RestaurantStorage>(storage: &S, restaurant: Restaurant) -> StorageResult<()> {
///     let stored = storage.create(restaurant).await?;
///
///     let patch = RestaurantPatch {
///         name: Some("New Name".to_string()),
///         ..Default::default()
///     };
///     storage.update(stored.id(), patch).await?;
///
///     storage.delete(stored.id()).await?;
///     assert!(storage.read(stored.id()).await?.is_none());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RestaurantStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Stores a new restaurant and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - If the write fails; nothing is stored
    async fn create(&self, restaurant: Restaurant) -> StorageResult<StoredRestaurant>;

    /// Stores several restaurants at once, all or none.
    ///
    /// Returns the stored documents in input order.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - If any write fails; nothing is stored
    async fn create_batch(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> StorageResult<Vec<StoredRestaurant>>;

    /// Reads a restaurant by id.
    ///
    /// Returns `None` if no document has that id.
    async fn read(&self, id: &str) -> StorageResult<Option<StoredRestaurant>>;

    /// Returns every stored restaurant in creation order.
    async fn list(&self) -> StorageResult<Vec<StoredRestaurant>>;

    /// Merges `patch` into the stored restaurant and returns the result.
    ///
    /// Fields absent from the patch keep their stored values.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no document has that id
    /// * `StorageError::Backend` - If the write fails; the document is unchanged
    async fn update(&self, id: &str, patch: RestaurantPatch) -> StorageResult<StoredRestaurant>;

    /// Permanently removes a restaurant.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no document has that id
    async fn delete(&self, id: &str) -> StorageResult<()>;

    /// Counts the stored restaurants.
    async fn count(&self) -> StorageResult<u64>;

    /// Checks if a restaurant exists.
    async fn exists(&self, id: &str) -> StorageResult<bool> {
        Ok(self.read(id).await?.is_some())
    }

    /// Verifies the store can answer queries.
    async fn health_check(&self) -> StorageResult<()> {
        self.count().await.map(|_| ())
    }
}
