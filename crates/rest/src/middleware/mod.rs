//! Middleware for the restaurants REST API.
//!
//! - [`error_body`] - JSON bodies for errors produced outside the handlers

pub mod error_body;

pub use error_body::timeout_error_body;
