//! Restaurants Persistence Layer
//!
//! This crate provides the document store behind the restaurants service.
//! Each restaurant is a JSON document keyed by a store-assigned id; the
//! store supports create, read, list, partial update (merge) and delete.
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! restaurants-persistence = { version = "0.1", features = ["sqlite"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`types`] - The restaurant document, patches and stored metadata
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and abstractions
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! use restaurants_persistence::backends::sqlite::SqliteBackend;
//! use restaurants_persistence::core::RestaurantStorage;
//! use restaurants_persistence::types::{Restaurant, RestaurantPatch};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let restaurant = Restaurant::from_value(json!({
//!     "name": "Morris Park Bake Shop",
//!     "cuisine": "Bakery",
//!     "borough": "Bronx",
//!     "address": {"building": "1007", "street": "Morris Park Ave", "zipcode": "10462"},
//!     "grades": [{"date": "2014-03-03T00:00:00Z", "grade": "A"}]
//! }))?;
//!
//! let stored = backend.create(restaurant).await?;
//!
//! let patch = RestaurantPatch::from_value(json!({"cuisine": "Cafe"}))?;
//! backend.update(stored.id(), patch).await?;
//!
//! backend.delete(stored.id()).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Restaurant, RestaurantPatch, StoredRestaurant};

// Re-export core traits
pub use core::{Backend, BackendKind, RestaurantStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
