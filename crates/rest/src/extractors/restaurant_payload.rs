//! Restaurant payload extractors.
//!
//! Extract and validate restaurant documents from request bodies. Malformed
//! payloads are rejected here, before any handler touches the store.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use restaurants_persistence::error::ValidationError;
use restaurants_persistence::types::{Restaurant, RestaurantPatch};
use serde_json::Value;

use crate::error::RestError;

/// Axum extractor for a raw JSON request body.
///
/// Accepts `application/json` (or any `+json` media type); a request
/// without a `Content-Type` header is read as JSON.
#[derive(Debug)]
pub struct JsonPayload(pub Value);

impl JsonPayload {
    /// Consumes the extractor and returns the inner Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Axum extractor for a restaurant being created.
///
/// # Example
///
/// ```rust,ignore
/// use restaurants_rest::extractors::NewRestaurant;
///
/// async fn create_handler(NewRestaurant(restaurant): NewRestaurant) {
///     println!("Creating {}", restaurant.name);
/// }
/// ```
#[derive(Debug)]
pub struct NewRestaurant(pub Restaurant);

/// Axum extractor for a partial restaurant update.
#[derive(Debug)]
pub struct RestaurantUpdate {
    /// The `id` carried in the body, if any.
    pub id: Option<String>,
    /// The fields to merge into the stored document.
    pub patch: RestaurantPatch,
}

/// Error type for payload extraction failures.
#[derive(Debug)]
pub enum PayloadRejection {
    /// The body could not be parsed as JSON.
    InvalidJson(String),
    /// The request declared a non-JSON content type.
    UnsupportedMediaType(String),
    /// The body exceeded the configured size limit.
    PayloadTooLarge(String),
    /// The JSON did not describe a valid restaurant.
    Invalid(ValidationError),
}

impl From<PayloadRejection> for RestError {
    fn from(rejection: PayloadRejection) -> Self {
        match rejection {
            PayloadRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            PayloadRejection::UnsupportedMediaType(ct) => RestError::BadRequest {
                message: format!("Content type '{}' is not supported, expected application/json", ct),
            },
            PayloadRejection::PayloadTooLarge(msg) => RestError::PayloadTooLarge { message: msg },
            PayloadRejection::Invalid(err) => err.into(),
        }
    }
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        RestError::from(self).into_response()
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Must own the string before moving req
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !is_json_content_type(&content_type) {
            return Err(PayloadRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                PayloadRejection::PayloadTooLarge(e.body_text())
            } else {
                PayloadRejection::InvalidJson(e.body_text())
            }
        })?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| PayloadRejection::InvalidJson(e.to_string()))?;

        Ok(JsonPayload(value))
    }
}

impl<S> FromRequest<S> for NewRestaurant
where
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonPayload(value) = JsonPayload::from_request(req, state).await?;
        Restaurant::from_value(value)
            .map(NewRestaurant)
            .map_err(PayloadRejection::Invalid)
    }
}

impl<S> FromRequest<S> for RestaurantUpdate
where
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonPayload(value) = JsonPayload::from_request(req, state).await?;
        RestaurantUpdate::from_value(value).map_err(PayloadRejection::Invalid)
    }
}

impl RestaurantUpdate {
    /// Splits an update payload into its body id and the patch.
    ///
    /// A `null` id counts as absent; any other non-string id is rejected.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let id = match value.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(_) => {
                return Err(ValidationError::InvalidField {
                    field: "id".to_string(),
                    message: "expected a string".to_string(),
                });
            }
        };

        Ok(Self {
            id,
            patch: RestaurantPatch::from_value(value)?,
        })
    }

    /// Checks that the body id, if present, names the path id.
    pub fn check_id(&self, path_id: &str) -> Result<(), RestError> {
        match self.id.as_deref() {
            Some(body_id) if body_id != path_id => Err(RestError::BadRequest {
                message: format!(
                    "Restaurant id in body ({}) does not match URL ({})",
                    body_id, path_id
                ),
            }),
            _ => Ok(()),
        }
    }
}
