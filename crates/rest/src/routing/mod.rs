//! Route configuration for the restaurants REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod restaurant_routes;

pub use restaurant_routes::create_routes;
