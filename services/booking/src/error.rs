//! Custom error types for the booking service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::repositories::booking::BookingStoreError;
use crate::repositories::user::UserStoreError;

/// Custom error type for the booking service
#[derive(Error, Debug)]
pub enum BookingError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Invalid credentials or expired session
    #[error("{0}")]
    Auth(String),

    /// Duplicate email or unavailable room
    #[error("{0}")]
    Conflict(String),

    /// Unknown room
    #[error("{0}")]
    NotFound(String),

    /// Underlying persistence failure; cause is logged, never shown
    #[error("Database error occurred. Please try again later.")]
    Store(#[from] sqlx::Error),

    /// Anything else; cause is logged, never shown
    #[error("An unexpected error occurred. Please try again.")]
    Internal(#[from] anyhow::Error),
}

impl From<UserStoreError> for BookingError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateEmail => {
                BookingError::Conflict("Email already registered. Please login.".to_string())
            }
            UserStoreError::Hash(msg) => BookingError::Internal(anyhow::anyhow!(msg)),
            UserStoreError::Database(err) => BookingError::Store(err),
        }
    }
}

impl From<BookingStoreError> for BookingError {
    fn from(err: BookingStoreError) -> Self {
        match err {
            BookingStoreError::Unavailable => BookingError::Conflict(
                "Room is not available for the selected dates".to_string(),
            ),
            BookingStoreError::Database(err) => BookingError::Store(err),
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match &self {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Auth(_) => StatusCode::UNAUTHORIZED,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Store(err) => {
                error!("Database error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            BookingError::Internal(err) => {
                error!("Unexpected error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for booking results
pub type BookingResult<T> = Result<T, BookingError>;
