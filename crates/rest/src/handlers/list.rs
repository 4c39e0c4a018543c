//! List handler.
//!
//! `GET [base]/restaurants`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restaurants_persistence::core::RestaurantStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::responses::RestaurantList;
use crate::state::AppState;

/// Handler for listing every restaurant.
///
/// There are no query parameters and no pagination; the response holds the
/// whole collection in creation order.
///
/// # Response
///
/// - `200 OK` - `{"restaurants": [...]}`
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: RestaurantStorage + Send + Sync,
{
    debug!("Processing list request");

    let stored = state.storage().list().await?;
    let count = stored.len();
    let list: RestaurantList = stored.into_iter().collect();

    debug!(count, "Listed restaurants");

    Ok((StatusCode::OK, Json(list)).into_response())
}
