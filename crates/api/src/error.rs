//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orchestration::OrchestrationError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Workflow error from the orchestrator.
    Orchestration(OrchestrationError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Orchestration(err) => orchestration_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn orchestration_error_to_response(err: OrchestrationError) -> (StatusCode, String) {
    match &err {
        OrchestrationError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        OrchestrationError::CustomerNotFound(_) | OrchestrationError::ItemNotFound(_) => {
            (StatusCode::NOT_FOUND, err.to_string())
        }
        OrchestrationError::InsufficientStock(_) => (StatusCode::CONFLICT, err.to_string()),
        OrchestrationError::Directory(_)
        | OrchestrationError::PersistenceFailure(_)
        | OrchestrationError::PaymentFailure(_)
        | OrchestrationError::Notification(_)
        | OrchestrationError::StepTimeout { .. } => {
            tracing::error!(error = %err, "workflow failed server-side");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<OrchestrationError> for ApiError {
    fn from(err: OrchestrationError) -> Self {
        ApiError::Orchestration(err)
    }
}
