//! # restaurants-rest - Restaurants REST API
//!
//! This crate maps HTTP requests onto the restaurant document store provided
//! by `restaurants-persistence`. It validates payloads at the boundary,
//! projects stored documents to their wire shape (deriving the current
//! grade), and maps storage errors to HTTP status codes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restaurants_rest::{create_app, ServerConfig};
//! use restaurants_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a storage backend
//!     let backend = SqliteBackend::open("restaurants.db")?;
//!     backend.init_schema()?;
//!
//!     // Create the Axum application
//!     let app = create_app(backend);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | list | GET | `/restaurants` | 200 `{"restaurants": [...]}` |
//! | read | GET | `/restaurants/{id}` | 200 |
//! | create | POST | `/restaurants` | 201 + `Location` |
//! | update | PUT | `/restaurants/{id}` | 204 |
//! | delete | DELETE | `/restaurants/{id}` | 204 |
//! | health | GET | `/health` | 200 / 503 |
//! | liveness | GET | `/_liveness` | 200 |
//!
//! Every restaurant in a response has exactly the keys `id`, `name`,
//! `cuisine`, `borough`, `grade` and `address`.
//!
//! ## Error Handling
//!
//! All errors are returned as `{"code": ..., "message": ...}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Bad request / validation error |
//! | 404 | not-found | Restaurant or route not found |
//! | 405 | method-not-allowed | Known path, unsupported method |
//! | 408 | timeout | Request exceeded the configured timeout |
//! | 413 | payload-too-large | Body exceeds the configured limit |
//! | 500 | exception | Store failure |
//! | 503 | unavailable | Store closed or unreachable |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Payload validation extractors
//! - [`responses`] - Projection and response headers
//! - [`routing`] - Route configuration
//! - [`middleware`] - JSON bodies for middleware-generated errors

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use std::str::FromStr;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method};
use restaurants_persistence::core::RestaurantStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: RestaurantStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use restaurants_rest::{create_app_with_config, ServerConfig};
/// use restaurants_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: RestaurantStorage + Send + Sync + 'static,
{
    create_app_with_shared_storage(Arc::new(storage), config)
}

/// Creates the Axum application around a storage handle the caller keeps.
///
/// The server binary uses this so it can `close()` the backend after the
/// router has shut down.
pub fn create_app_with_shared_storage<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: RestaurantStorage + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(storage, config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::timeout_error_body))
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// `*` allows anything; otherwise each comma-separated entry is parsed and
/// entries that do not parse are skipped with a warning.
/// [`ServerConfig::validate`] rejects such entries before the server starts.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        cors = cors.allow_origin(parse_cors_list::<HeaderValue>("origin", &config.cors_origins));
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        cors = cors.allow_methods(parse_cors_list::<Method>("method", &config.cors_methods));
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        cors = cors.allow_headers(parse_cors_list::<HeaderName>("header", &config.cors_headers));
    }

    cors
}

fn parse_cors_list<T: FromStr>(kind: &str, list: &str) -> Vec<T> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(kind, entry, "Ignoring unparseable CORS entry");
                None
            }
        })
        .collect()
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// overrides `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "restaurants_rest={level},restaurants_persistence={level},restaurants_server={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
