//! RestaurantStorage implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{ErrorCode, OptionalExtension, TransactionBehavior, params};

use crate::core::RestaurantStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{Restaurant, RestaurantPatch, StoredRestaurant};

use super::SqliteBackend;
use super::backend::BACKEND_NAME;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: BACKEND_NAME.to_string(),
        message,
        source: None,
    })
}

fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

fn parse_timestamp(value: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| internal_error(format!("Failed to parse timestamp '{}': {}", value, e)))
}

fn decode_restaurant(data: &[u8]) -> StorageResult<Restaurant> {
    serde_json::from_slice(data)
        .map_err(|e| serialization_error(format!("Failed to deserialize restaurant: {}", e)))
}

fn encode_restaurant(restaurant: &Restaurant) -> StorageResult<Vec<u8>> {
    serde_json::to_vec(restaurant)
        .map_err(|e| serialization_error(format!("Failed to serialize restaurant: {}", e)))
}

fn insert_error(e: rusqlite::Error, id: &str) -> StorageError {
    match e {
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
            StorageError::Resource(ResourceError::AlreadyExists { id: id.to_string() })
        }
        e => internal_error(format!("Failed to insert restaurant: {}", e)),
    }
}

const INSERT_RESTAURANT: &str = "INSERT INTO restaurants (id, data, created_at, last_updated)
     VALUES (?1, ?2, ?3, ?3)";

/// Raw row: id, data, created_at, last_updated.
type RestaurantRow = (String, Vec<u8>, String, String);

fn row_to_stored(row: RestaurantRow) -> StorageResult<StoredRestaurant> {
    let (id, data, created_at, last_updated) = row;
    Ok(StoredRestaurant::from_storage(
        id,
        decode_restaurant(&data)?,
        parse_timestamp(&created_at)?,
        parse_timestamp(&last_updated)?,
    ))
}

#[async_trait]
impl RestaurantStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn create(&self, restaurant: Restaurant) -> StorageResult<StoredRestaurant> {
        let conn = self.get_connection()?;

        let id = uuid::Uuid::new_v4().to_string();
        let data = encode_restaurant(&restaurant)?;
        let now = Utc::now();
        let timestamp = now.to_rfc3339();

        conn.execute(INSERT_RESTAURANT, params![id, data, timestamp])
            .map_err(|e| insert_error(e, &id))?;

        tracing::debug!(id = %id, "Inserted restaurant");

        Ok(StoredRestaurant::from_storage(id, restaurant, now, now))
    }

    async fn create_batch(
        &self,
        restaurants: Vec<Restaurant>,
    ) -> StorageResult<Vec<StoredRestaurant>> {
        let mut conn = self.get_connection()?;

        // Dropping the transaction before commit rolls every insert back
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let now = Utc::now();
        let timestamp = now.to_rfc3339();
        let mut stored = Vec::with_capacity(restaurants.len());

        for restaurant in restaurants {
            let id = uuid::Uuid::new_v4().to_string();
            let data = encode_restaurant(&restaurant)?;
            tx.execute(INSERT_RESTAURANT, params![id, data, timestamp])
                .map_err(|e| insert_error(e, &id))?;
            stored.push(StoredRestaurant::from_storage(id, restaurant, now, now));
        }

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit batch insert: {}", e)))?;

        tracing::debug!(count = stored.len(), "Inserted restaurant batch");
        Ok(stored)
    }

    async fn read(&self, id: &str) -> StorageResult<Option<StoredRestaurant>> {
        let conn = self.get_connection()?;

        let row: Option<RestaurantRow> = conn
            .query_row(
                "SELECT id, data, created_at, last_updated FROM restaurants WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read restaurant: {}", e)))?;

        row.map(row_to_stored).transpose()
    }

    async fn list(&self) -> StorageResult<Vec<StoredRestaurant>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, data, created_at, last_updated FROM restaurants ORDER BY seq ASC",
            )
            .map_err(|e| internal_error(format!("Failed to prepare list query: {}", e)))?;

        let rows: Vec<RestaurantRow> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .and_then(|rows| rows.collect::<Result<Vec<_>, _>>())
            .map_err(|e| internal_error(format!("Failed to list restaurants: {}", e)))?;

        rows.into_iter().map(row_to_stored).collect()
    }

    async fn update(&self, id: &str, patch: RestaurantPatch) -> StorageResult<StoredRestaurant> {
        let mut conn = self.get_connection()?;

        // IMMEDIATE takes the write lock up front so the read-merge-write
        // sequence cannot interleave with another writer.
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let current: Option<(Vec<u8>, String)> = tx
            .query_row(
                "SELECT data, created_at FROM restaurants WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|e| internal_error(format!("Failed to read restaurant: {}", e)))?;

        let Some((data, created_at)) = current else {
            return Err(StorageError::not_found(id));
        };

        let mut restaurant = decode_restaurant(&data)?;
        patch.apply_to(&mut restaurant);

        let data = encode_restaurant(&restaurant)?;
        let now = Utc::now();

        tx.execute(
            "UPDATE restaurants SET data = ?2, last_updated = ?3 WHERE id = ?1",
            params![id, data, now.to_rfc3339()],
        )
        .map_err(|e| internal_error(format!("Failed to update restaurant: {}", e)))?;

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit update: {}", e)))?;

        Ok(StoredRestaurant::from_storage(
            id,
            restaurant,
            parse_timestamp(&created_at)?,
            now,
        ))
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        let conn = self.get_connection()?;

        let deleted = conn
            .execute("DELETE FROM restaurants WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete restaurant: {}", e)))?;

        if deleted == 0 {
            return Err(StorageError::not_found(id));
        }

        tracing::debug!(id = %id, "Deleted restaurant");
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM restaurants", [], |row| row.get(0))
            .map_err(|e| internal_error(format!("Failed to count restaurants: {}", e)))?;

        Ok(count as u64)
    }
}
