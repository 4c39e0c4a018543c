//! Read handler.
//!
//! `GET [base]/restaurants/[id]`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restaurants_persistence::core::RestaurantStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::responses::{RestaurantHeaders, RestaurantRepresentation};
use crate::state::AppState;

/// Handler for reading one restaurant.
///
/// # Response
///
/// - `200 OK` - The projected restaurant, with a `Last-Modified` header
/// - `404 Not Found` - No restaurant has that id
///
/// # Example
///
/// ```http
/// GET /restaurants/0b6b4d8e-4f1e-4c55-9f0e-3c2a1b7d9e21 HTTP/1.1
/// Accept: application/json
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: RestaurantStorage + Send + Sync,
{
    debug!(id = %id, "Processing read request");

    let stored = state
        .storage()
        .read(&id)
        .await?
        .ok_or_else(|| RestError::NotFound { id: id.clone() })?;

    let headers = RestaurantHeaders::from_stored(&stored).to_header_map();
    let body = RestaurantRepresentation::from(stored);

    Ok((StatusCode::OK, headers, Json(body)).into_response())
}
