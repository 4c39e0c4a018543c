//! Delete handler.
//!
//! `DELETE [base]/restaurants/[id]`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restaurants_persistence::core::RestaurantStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for deleting a restaurant.
///
/// Deletes are permanent; a later read of the id returns 404.
///
/// # Response
///
/// - `204 No Content` - Restaurant removed
/// - `404 Not Found` - No restaurant has that id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: RestaurantStorage + Send + Sync,
{
    debug!(id = %id, "Processing delete request");

    state.storage().delete(&id).await?;

    debug!(id = %id, "Restaurant deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
