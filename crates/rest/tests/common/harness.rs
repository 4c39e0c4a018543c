//! REST API test harness.
//!
//! Provides a test server backed by an in-memory SQLite store.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use restaurants_persistence::backends::sqlite::SqliteBackend;
use restaurants_persistence::core::RestaurantStorage;
use serde_json::Value;

use restaurants_rest::{ServerConfig, create_app_with_shared_storage};

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// let harness = RestTestHarness::new();
/// let id = harness.create(&fixtures::wendys()).await;
/// harness.server.get(&format!("/restaurants/{}", id)).await.assert_status_ok();
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend.
    pub backend: Arc<SqliteBackend>,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness with the testing configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
        backend.init_schema().expect("Failed to init schema");
        let backend = Arc::new(backend);

        let app = create_app_with_shared_storage(Arc::clone(&backend), config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            config,
        }
    }

    /// Builds a fresh router over the same backend, for driving with `oneshot`.
    pub fn router(&self) -> Router {
        create_app_with_shared_storage(Arc::clone(&self.backend), self.config.clone())
    }

    /// Creates a restaurant through the API and returns its id.
    pub async fn create(&self, payload: &Value) -> String {
        let response = self.server.post("/restaurants").json(payload).await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        body["id"]
            .as_str()
            .expect("created restaurant has a string id")
            .to_string()
    }

    /// Fetches the list endpoint and returns the restaurants array.
    pub async fn list(&self) -> Vec<Value> {
        let response = self.server.get("/restaurants").await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["restaurants"]
            .as_array()
            .expect("list body has a restaurants array")
            .clone()
    }

    /// Fetches one projected restaurant.
    pub async fn get(&self, id: &str) -> Value {
        let response = self.server.get(&format!("/restaurants/{}", id)).await;
        response.assert_status_ok();
        response.json()
    }

    /// Counts documents directly in the store.
    pub async fn count(&self) -> u64 {
        self.backend.count().await.expect("count failed")
    }
}
