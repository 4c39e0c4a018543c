//! Response header generation.

use axum::http::{HeaderMap, HeaderValue, header};
use restaurants_persistence::types::StoredRestaurant;

/// Builder for restaurant response headers.
///
/// Generates:
/// - Last-Modified (from the stored document's update time)
/// - Location (for create operations)
#[derive(Debug, Default)]
pub struct RestaurantHeaders {
    /// Last-Modified timestamp.
    last_modified: Option<String>,
    /// Location URL (for created restaurants).
    location: Option<String>,
}

impl RestaurantHeaders {
    /// Creates an empty RestaurantHeaders builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates headers from a StoredRestaurant.
    pub fn from_stored(stored: &StoredRestaurant) -> Self {
        Self {
            last_modified: Some(
                stored
                    .last_updated()
                    .format("%a, %d %b %Y %H:%M:%S GMT")
                    .to_string(),
            ),
            location: None,
        }
    }

    /// Sets the Location URL for a restaurant id under `base_url`.
    pub fn with_location(mut self, base_url: &str, id: &str) -> Self {
        self.location = Some(restaurant_location(base_url, id));
        self
    }

    /// Converts to an Axum HeaderMap.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(last_modified) = &self.last_modified {
            if let Ok(value) = HeaderValue::from_str(last_modified) {
                headers.insert(header::LAST_MODIFIED, value);
            }
        }

        if let Some(location) = &self.location {
            if let Ok(value) = HeaderValue::from_str(location) {
                headers.insert(header::LOCATION, value);
            }
        }

        headers
    }

    /// Returns the Last-Modified value.
    pub fn last_modified(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }

    /// Returns the Location value.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Returns the canonical URL of a restaurant.
pub fn restaurant_location(base_url: &str, id: &str) -> String {
    format!("{}/restaurants/{}", base_url.trim_end_matches('/'), id)
}
