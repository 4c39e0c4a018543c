//! Server configuration for the restaurants REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RESTAURANTS_SERVER_PORT` | 8080 | Server port |
//! | `RESTAURANTS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `RESTAURANTS_LOG_LEVEL` | info | Log level |
//! | `RESTAURANTS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `RESTAURANTS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `RESTAURANTS_ENABLE_CORS` | true | Enable CORS |
//! | `RESTAURANTS_CORS_ORIGINS` | * | Allowed origins |
//! | `RESTAURANTS_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `RESTAURANTS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `RESTAURANTS_BASE_URL` | http://localhost:8080 | Base URL for Location headers |
//! | `RESTAURANTS_DATABASE_URL` | restaurants.db | SQLite file path, or `:memory:` |
//! | `RESTAURANTS_SEED_FILE` | (none) | JSON array loaded into an empty store |
//!
//! # Example
//!
//! ```rust
//! use restaurants_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use axum::http::{HeaderName, HeaderValue, Method};
use clap::Parser;

const DEFAULT_CORS_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
const DEFAULT_CORS_HEADERS: &str = "Content-Type,Accept";

/// Server configuration for the restaurants REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "restaurants-server")]
#[command(about = "Restaurants REST API Server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "RESTAURANTS_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "RESTAURANTS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "RESTAURANTS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "RESTAURANTS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "RESTAURANTS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "RESTAURANTS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "RESTAURANTS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "RESTAURANTS_CORS_METHODS", default_value = DEFAULT_CORS_METHODS)]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "RESTAURANTS_CORS_HEADERS", default_value = DEFAULT_CORS_HEADERS)]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers).
    #[arg(long, env = "RESTAURANTS_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// SQLite database path, or `:memory:` for a throwaway store.
    #[arg(long, env = "RESTAURANTS_DATABASE_URL", default_value = "restaurants.db")]
    pub database_url: String,

    /// JSON file of restaurants loaded at startup when the store is empty.
    #[arg(long, env = "RESTAURANTS_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: DEFAULT_CORS_METHODS.to_string(),
            cors_headers: DEFAULT_CORS_HEADERS.to_string(),
            base_url: "http://localhost:8080".to_string(),
            database_url: "restaurants.db".to_string(),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["restaurants-server"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Returns true if the store should live in memory only.
    pub fn is_memory_database(&self) -> bool {
        self.database_url == ":memory:"
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.database_url.trim().is_empty() {
            errors.push("Database URL cannot be empty".to_string());
        }

        if self.enable_cors {
            errors.extend(invalid_cors_entries::<HeaderValue>("origin", &self.cors_origins));
            errors.extend(invalid_cors_entries::<Method>("method", &self.cors_methods));
            errors.extend(invalid_cors_entries::<HeaderName>("header", &self.cors_headers));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            errors.push(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database, and disables
    /// features that might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:0".to_string(),
            database_url: ":memory:".to_string(),
            seed_file: None,
        }
    }
}

/// Lists the entries of a comma-separated CORS setting that do not parse.
fn invalid_cors_entries<T: FromStr>(kind: &str, list: &str) -> Vec<String> {
    if list == "*" {
        return Vec::new();
    }
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && entry.parse::<T>().is_err())
        .map(|entry| format!("Invalid CORS {} '{}'", kind, entry))
        .collect()
}
