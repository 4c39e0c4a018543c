//! Restaurant route configuration.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    routing::get,
};
use restaurants_persistence::core::RestaurantStorage;

use crate::error::RestError;
use crate::handlers;
use crate::state::AppState;

/// Creates all restaurant REST API routes.
///
/// # Routes
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// ## Collection
/// - `GET /restaurants` - List
/// - `POST /restaurants` - Create
///
/// ## Instance
/// - `GET /restaurants/{id}` - Read
/// - `PUT /restaurants/{id}` - Partial update
/// - `DELETE /restaurants/{id}` - Delete
///
/// Any other path answers 404, and an unsupported method on a known path
/// answers 405, both with the JSON error body.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RestaurantStorage + Send + Sync + 'static,
{
    let body_limit = state.config().max_body_size;

    Router::new()
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        // Collection routes
        .route(
            "/restaurants",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        // Instance routes
        .route(
            "/restaurants/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(body_limit))
        // State
        .with_state(state)
}

async fn not_found_handler(uri: Uri) -> RestError {
    RestError::RouteNotFound {
        path: uri.path().to_string(),
    }
}

async fn method_not_allowed_handler(method: Method, uri: Uri) -> RestError {
    RestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
