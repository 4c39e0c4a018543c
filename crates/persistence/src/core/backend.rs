//! Backend abstraction for database drivers.
//!
//! This module defines the [`Backend`] trait, which covers the lifecycle of a
//! database backend: schema initialization before serving, health checks
//! while serving, and an explicit close on shutdown.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// Custom or unknown backend.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Sqlite => write!(f, "sqlite"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A database backend with an explicit open/close lifecycle.
///
/// A backend is opened by its constructor, made ready with
/// [`initialize`](Backend::initialize), and released with
/// [`close`](Backend::close). Storage calls made after `close` fail with
/// [`BackendError::Unavailable`].
///
/// # Example
///
/// ```ignore
/// use restaurants_persistence::backends::sqlite::SqliteBackend;
/// use restaurants_persistence::core::Backend;
///
/// let backend = SqliteBackend::open("restaurants.db")?;
/// backend.initialize().await?;
/// // ... serve requests ...
/// backend.close().await?;
/// ```
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &'static str;

    /// Checks if the backend is healthy and accepting connections.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Initializes the database schema if needed. Idempotent.
    async fn initialize(&self) -> Result<(), BackendError>;

    /// Flushes pending state and stops accepting work.
    async fn close(&self) -> Result<(), BackendError>;

    /// Returns true once [`close`](Backend::close) has completed.
    fn is_closed(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Sqlite.to_string(), "sqlite");
        assert_eq!(BackendKind::Custom("custom-db").to_string(), "custom-db");
    }
}
