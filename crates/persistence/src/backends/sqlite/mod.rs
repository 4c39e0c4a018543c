//! SQLite backend implementation.
//!
//! Documents are stored as JSON blobs keyed by their assigned id. Both
//! in-memory databases (for tests) and file-based databases are supported.
//!
//! # Example
//!
//! ```no_run
//! use restaurants_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE restaurants (
//!     seq INTEGER PRIMARY KEY AUTOINCREMENT,  -- creation order
//!     id TEXT NOT NULL UNIQUE,
//!     data BLOB NOT NULL,                     -- JSON document
//!     created_at TEXT NOT NULL,
//!     last_updated TEXT NOT NULL
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
