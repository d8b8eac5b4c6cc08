//! HTTP error response mapping.
//!
//! The API speaks two error dialects, both inherited from the original
//! contract: restaurant lookups answer with a single `error` string, while
//! association creation answers with an `errors` array. Both wrappers map
//! the same domain error, they only differ in body shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use slicehub_domain::error::SliceHubError;

/// JSON error body with a single message, e.g. `{"error": "Restaurant not found"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON error body with a message array, e.g. `{"errors": ["Missing required fields"]}`.
#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

fn status_and_message(err: &SliceHubError) -> (StatusCode, String) {
    match err {
        SliceHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        SliceHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        SliceHubError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`SliceHubError`] to a response with an `error` field.
pub struct ApiError(SliceHubError);

impl From<SliceHubError> for ApiError {
    fn from(err: SliceHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Maps [`SliceHubError`] to a response with an `errors` array.
pub struct ApiErrors(SliceHubError);

impl From<SliceHubError> for ApiErrors {
    fn from(err: SliceHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiErrors {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorsBody { errors: vec![message] })).into_response()
    }
}
