//! HTTP error response mapping.
//!
//! Every failure is answered with a short plaintext body. Internal details
//! are logged, never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use todohub_domain::error::{TodoHubError, ValidationError};

/// Maps [`TodoHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(TodoHubError);

impl From<TodoHubError> for ApiError {
    fn from(err: TodoHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");
        ValidationError::MalformedBody.into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TodoHubError::Validation(err) => {
                tracing::debug!(error = %err, "bad request");
                (StatusCode::BAD_REQUEST, "Bad request")
            }
            TodoHubError::NotFound(err) => {
                tracing::debug!(error = %err, "not found");
                (StatusCode::NOT_FOUND, "Not found")
            }
            TodoHubError::Storage(err) => {
                tracing::error!(error = %err, source = ?err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}
