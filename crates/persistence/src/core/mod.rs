//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Database driver lifecycle (initialize, health, close)
//! - [`RestaurantStorage`] - Document store operations

pub mod backend;
pub mod storage;

pub use backend::{Backend, BackendKind};
pub use storage::RestaurantStorage;
