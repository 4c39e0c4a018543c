//! Axum extractors for restaurant payloads.
//!
//! - [`JsonPayload`] - Read a JSON body, enforcing the content type and size limit
//! - [`NewRestaurant`] - Validate a body as a complete restaurant
//! - [`RestaurantUpdate`] - Validate a body as a partial update with an optional id

mod restaurant_payload;

pub use restaurant_payload::{JsonPayload, NewRestaurant, PayloadRejection, RestaurantUpdate};
