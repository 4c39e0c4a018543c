//! JSON error bodies for middleware-generated responses.
//!
//! The timeout layer answers an expired request with a bare 408. This
//! middleware sits just outside it and swaps that response for the standard
//! `{"code": ..., "message": ...}` body.

use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::RestError;

/// Rewrites a body-less 408 into a [`RestError::RequestTimeout`] response.
///
/// Use with `axum::middleware::from_fn`, layered outside the timeout layer.
pub async fn timeout_error_body(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        warn!(method = %method, path = %path, "Request timed out");
        return RestError::RequestTimeout.into_response();
    }

    response
}
