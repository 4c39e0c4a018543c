//! Core types for the persistence layer.
//!
//! - [`Restaurant`], [`Address`], [`Grade`] - The document shape
//! - [`RestaurantPatch`] - A partial update
//! - [`StoredRestaurant`] - A document with store-assigned metadata
//! - [`current_grade`] - Derives the current grade from a grade history
//!
//! # Examples
//!
//! ```
//! use restaurants_persistence::types::Restaurant;
//! use serde_json::json;
//!
//! let restaurant = Restaurant::from_value(json!({
//!     "name": "Dj Reynolds Pub And Restaurant",
//!     "cuisine": "Irish",
//!     "borough": "Manhattan",
//!     "grades": [
//!         {"date": "2014-09-06T00:00:00Z", "grade": "A"},
//!         {"date": "2013-07-22T00:00:00Z", "grade": "B"}
//!     ]
//! }))
//! .unwrap();
//!
//! assert_eq!(restaurant.current_grade(), Some("A"));
//! ```

mod restaurant;
mod stored_restaurant;

pub use restaurant::{
    Address, Grade, KNOWN_BOROUGHS, Restaurant, RestaurantPatch, current_grade,
    is_known_borough,
};
pub use stored_restaurant::StoredRestaurant;
