//! Update handler.
//!
//! `PUT [base]/restaurants/[id]`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restaurants_persistence::core::RestaurantStorage;
use restaurants_persistence::types::is_known_borough;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::extractors::RestaurantUpdate;
use crate::state::AppState;

/// Handler for partially updating a restaurant.
///
/// Only the fields present in the body are replaced; `address` and `grades`
/// are replaced wholesale when supplied. The merge runs inside one store
/// transaction.
///
/// # Response
///
/// - `204 No Content` - Update applied
/// - `400 Bad Request` - Body `id` differs from the URL, or a field is mistyped
/// - `404 Not Found` - No restaurant has that id
///
/// # Example
///
/// ```http
/// PUT /restaurants/0b6b4d8e-4f1e-4c55-9f0e-3c2a1b7d9e21 HTTP/1.1
/// Content-Type: application/json
///
/// {"cuisine": "Cafe/Coffee/Tea"}
/// ```
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    update: RestaurantUpdate,
) -> RestResult<Response>
where
    S: RestaurantStorage + Send + Sync,
{
    debug!(
        id = %id,
        fields = ?update.patch.updated_fields(),
        "Processing update request"
    );

    update.check_id(&id)?;

    if let Some(borough) = update.patch.borough.as_deref() {
        if !is_known_borough(borough) {
            warn!(id = %id, borough = %borough, "Moving restaurant to an unknown borough");
        }
    }

    if update.patch.is_empty() {
        // Nothing to merge, but an unknown id is still an error
        if !state.storage().exists(&id).await? {
            return Err(RestError::NotFound { id });
        }
        debug!(id = %id, "Empty update, nothing changed");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    state.storage().update(&id, update.patch).await?;

    debug!(id = %id, "Restaurant updated");

    Ok(StatusCode::NO_CONTENT.into_response())
}
