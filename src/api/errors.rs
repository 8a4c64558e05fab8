use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::errors::JobUseCaseError;

/// API error response, rendered as `{ "error": { "message", "status" } }`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

impl From<JobUseCaseError> for ApiError {
    fn from(err: JobUseCaseError) -> Self {
        match err {
            JobUseCaseError::BadRequest(msg) => ApiError::bad_request(msg),
            JobUseCaseError::NotFound(msg) => ApiError::not_found(msg),
            JobUseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            JobUseCaseError::Repository(e) => {
                error!(error = %e, "repository failure");
                ApiError::internal_error("Internal server error")
            }
        }
    }
}
