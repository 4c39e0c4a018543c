//! Error types for the persistence layer.
//!
//! Errors are grouped by category: resource state errors, payload validation
//! errors, and errors originating in the database backend.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested restaurant was not found.
    #[error("restaurant not found: {id}")]
    NotFound { id: String },

    /// A restaurant with the given ID already exists.
    #[error("restaurant already exists: {id}")]
    AlreadyExists { id: String },
}

/// Errors related to document validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Missing required field.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    /// A field was present but had the wrong shape.
    #[error("invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// The document could not be interpreted at all.
    #[error("invalid document: {message}")]
    InvalidDocument { message: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable (closed or unreachable).
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Schema creation error.
    #[error("schema initialization failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

impl StorageError {
    /// Shorthand for a not-found error on the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StorageError::Resource(ResourceError::NotFound { id: id.into() })
    }

    /// Returns true if this error reports a missing restaurant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
