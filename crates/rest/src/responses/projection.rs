//! Wire representation of restaurants.
//!
//! A stored restaurant is projected to exactly six keys: `id`, `name`,
//! `cuisine`, `borough`, `grade` and `address`. The grade history itself is
//! never exposed; `grade` is the current grade derived from it, or `null`
//! when the history is empty.

use restaurants_persistence::types::{Address, StoredRestaurant};
use serde::Serialize;

/// A restaurant as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantRepresentation {
    /// Store-assigned identifier.
    pub id: String,
    /// Restaurant name.
    pub name: String,
    /// Cuisine.
    pub cuisine: String,
    /// Borough.
    pub borough: String,
    /// Current grade.
    pub grade: Option<String>,
    /// Street address.
    pub address: Address,
}

impl From<&StoredRestaurant> for RestaurantRepresentation {
    fn from(stored: &StoredRestaurant) -> Self {
        let restaurant = stored.restaurant();
        Self {
            id: stored.id().to_string(),
            name: restaurant.name.clone(),
            cuisine: restaurant.cuisine.clone(),
            borough: restaurant.borough.clone(),
            grade: restaurant.current_grade().map(str::to_string),
            address: restaurant.address.clone(),
        }
    }
}

impl From<StoredRestaurant> for RestaurantRepresentation {
    fn from(stored: StoredRestaurant) -> Self {
        let id = stored.id().to_string();
        let restaurant = stored.into_restaurant();
        let grade = restaurant.current_grade().map(str::to_string);
        Self {
            id,
            name: restaurant.name,
            cuisine: restaurant.cuisine,
            borough: restaurant.borough,
            grade,
            address: restaurant.address,
        }
    }
}

/// Envelope for the list response: `{"restaurants": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantList {
    /// Every stored restaurant, in creation order.
    pub restaurants: Vec<RestaurantRepresentation>,
}

impl FromIterator<StoredRestaurant> for RestaurantList {
    fn from_iter<I: IntoIterator<Item = StoredRestaurant>>(iter: I) -> Self {
        Self {
            restaurants: iter.into_iter().map(RestaurantRepresentation::from).collect(),
        }
    }
}
