//! Stored restaurant types.
//!
//! This module defines the [`StoredRestaurant`] type, which wraps a
//! [`Restaurant`] document with the metadata the store assigns to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::restaurant::Restaurant;

/// A restaurant document with persistence metadata.
///
/// # Examples
///
/// ```
/// use restaurants_persistence::types::{Address, Restaurant, StoredRestaurant};
///
/// let stored = StoredRestaurant::new(
///     "0f8fad5b-d9cb-469f-a165-70867728950e",
///     Restaurant {
///         name: "Riviera Caterer".to_string(),
///         cuisine: "American".to_string(),
///         borough: "Brooklyn".to_string(),
///         address: Address::default(),
///         grades: vec![],
///     },
/// );
///
/// assert_eq!(stored.id(), "0f8fad5b-d9cb-469f-a165-70867728950e");
/// assert_eq!(stored.created_at(), stored.last_updated());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRestaurant {
    /// Store-assigned identifier.
    id: String,

    /// The document itself.
    restaurant: Restaurant,

    /// When the document was created.
    created_at: DateTime<Utc>,

    /// When the document was last modified.
    last_updated: DateTime<Utc>,
}

impl StoredRestaurant {
    /// Creates a freshly stored document with both timestamps set to now.
    pub fn new(id: impl Into<String>, restaurant: Restaurant) -> Self {
        let now = Utc::now();
        Self::from_storage(id, restaurant, now, now)
    }

    /// Creates a stored document from existing data (e.g., loaded from database).
    pub fn from_storage(
        id: impl Into<String>,
        restaurant: Restaurant,
        created_at: DateTime<Utc>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            restaurant,
            created_at,
            last_updated,
        }
    }

    /// Returns the store-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the document.
    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Consumes the wrapper, returning the document.
    pub fn into_restaurant(self) -> Restaurant {
        self.restaurant
    }

    /// Returns when the document was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the document was last modified.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}
