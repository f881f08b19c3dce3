//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use salon_domain::error::{SalonError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SalonError`] to an HTTP status code and message.
pub(crate) fn status_and_message(err: &SalonError) -> (StatusCode, String) {
    match err {
        SalonError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        SalonError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        SalonError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`SalonError`] to a JSON HTTP response with appropriate status code.
pub struct ApiError(SalonError);

impl From<SalonError> for ApiError {
    fn from(err: SalonError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
