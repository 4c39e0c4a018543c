//! HTTP request handlers for the restaurant collection.
//!
//! - [`list`] - List every restaurant
//! - [`read`] - Read a restaurant by ID
//! - [`create`] - Create a new restaurant
//! - [`update`] - Partially update a restaurant
//! - [`delete`] - Delete a restaurant
//! - [`health`] - Health and liveness endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
