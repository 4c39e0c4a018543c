//! Health check endpoint handlers.
//!
//! Provides health and liveness endpoints for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restaurants_persistence::core::RestaurantStorage;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Asks the store to answer a trivial query before reporting healthy.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Store reachable
/// - `503 Service Unavailable` - Store health check failed
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: RestaurantStorage + Send + Sync,
{
    debug!("Processing health check request");

    let backend_name = state.storage().backend_name();
    let timestamp = chrono::Utc::now().to_rfc3339();

    match state.storage().health_check().await {
        Ok(()) => {
            let body = serde_json::json!({
                "status": "healthy",
                "backend": backend_name,
                "timestamp": timestamp
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Health check failed");
            let body = serde_json::json!({
                "status": "unhealthy",
                "backend": backend_name,
                "timestamp": timestamp,
                "error": e.to_string()
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
