//! Custom error types for the confirmation service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the confirmation service
#[derive(Error, Debug)]
pub enum ConfirmationError {
    /// The request body was not a valid JSON object
    #[error("Invalid JSON data")]
    InvalidJson,

    /// A required display field was absent from the payload
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl IntoResponse for ConfirmationError {
    fn into_response(self) -> Response {
        let status = match self {
            ConfirmationError::InvalidJson | ConfirmationError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
