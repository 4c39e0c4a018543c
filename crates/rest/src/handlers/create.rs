//! Create handler.
//!
//! `POST [base]/restaurants`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restaurants_persistence::core::RestaurantStorage;
use restaurants_persistence::types::is_known_borough;
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::extractors::NewRestaurant;
use crate::responses::{RestaurantHeaders, RestaurantRepresentation};
use crate::state::AppState;

/// Handler for creating a restaurant.
///
/// The store assigns the id; an `id` supplied in the body is ignored.
///
/// # Response
///
/// - `201 Created` - The projected restaurant, with `Location` pointing at it
/// - `400 Bad Request` - Missing or mistyped fields, malformed JSON
/// - `413 Payload Too Large` - Body exceeds the configured limit
///
/// # Example
///
/// ```http
/// POST /restaurants HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Wendy'S", "cuisine": "Hamburgers", "borough": "Brooklyn"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    NewRestaurant(restaurant): NewRestaurant,
) -> RestResult<Response>
where
    S: RestaurantStorage + Send + Sync,
{
    debug!(
        name = %restaurant.name,
        borough = %restaurant.borough,
        grades = restaurant.grades.len(),
        "Processing create request"
    );

    if !is_known_borough(&restaurant.borough) {
        warn!(borough = %restaurant.borough, "Creating restaurant in an unknown borough");
    }

    let stored = state.storage().create(restaurant).await?;

    debug!(id = %stored.id(), "Restaurant created");

    let headers = RestaurantHeaders::from_stored(&stored)
        .with_location(state.base_url(), stored.id())
        .to_header_map();
    let body = RestaurantRepresentation::from(stored);

    Ok((StatusCode::CREATED, headers, Json(body)).into_response())
}
