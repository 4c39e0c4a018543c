//! Response building for the restaurants REST API.
//!
//! - [`projection`] - The client-facing restaurant representation
//! - [`headers`] - Response header generation (Location, Last-Modified)

pub mod headers;
pub mod projection;

pub use headers::{RestaurantHeaders, restaurant_location};
pub use projection::{RestaurantList, RestaurantRepresentation};
