//! A storage backend that fails every call.

use async_trait::async_trait;
use restaurants_persistence::core::RestaurantStorage;
use restaurants_persistence::error::{BackendError, StorageError, StorageResult};
use restaurants_persistence::types::{Restaurant, RestaurantPatch, StoredRestaurant};

/// How the store fails.
#[derive(Debug, Clone, Copy)]
pub enum FailureMode {
    /// Internal errors, mapped to 500.
    Internal,
    /// Store closed, mapped to 503.
    Unavailable,
}

/// Storage whose every operation returns an error.
#[derive(Debug, Clone, Copy)]
pub struct FailingStorage {
    mode: FailureMode,
}

impl FailingStorage {
    pub fn new(mode: FailureMode) -> Self {
        Self { mode }
    }

    fn error(&self) -> StorageError {
        match self.mode {
            FailureMode::Internal => StorageError::Backend(BackendError::Internal {
                backend_name: "failing".to_string(),
                message: "disk I/O error".to_string(),
                source: None,
            }),
            FailureMode::Unavailable => StorageError::Backend(BackendError::Unavailable {
                backend_name: "failing".to_string(),
                message: "backend has been closed".to_string(),
            }),
        }
    }
}

#[async_trait]
impl RestaurantStorage for FailingStorage {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn create(&self, _restaurant: Restaurant) -> StorageResult<StoredRestaurant> {
        Err(self.error())
    }

    async fn create_batch(
        &self,
        _restaurants: Vec<Restaurant>,
    ) -> StorageResult<Vec<StoredRestaurant>> {
        Err(self.error())
    }

    async fn read(&self, _id: &str) -> StorageResult<Option<StoredRestaurant>> {
        Err(self.error())
    }

    async fn list(&self) -> StorageResult<Vec<StoredRestaurant>> {
        Err(self.error())
    }

    async fn update(&self, _id: &str, _patch: RestaurantPatch) -> StorageResult<StoredRestaurant> {
        Err(self.error())
    }

    async fn delete(&self, _id: &str) -> StorageResult<()> {
        Err(self.error())
    }

    async fn count(&self) -> StorageResult<u64> {
        Err(self.error())
    }
}
