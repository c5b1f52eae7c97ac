//! Confirmation service routes

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::error::ConfirmationError;
use crate::models::BookingConfirmation;
use crate::render;

/// Create the router for the confirmation service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/internal/confirmation", post(receive_confirmation))
        .route("/confirmation/:reference", get(confirmation_page))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "confirmation-service",
        "activeBookings": state.store.count(),
    }))
}

/// Receive booking display data from the booking service
pub async fn receive_confirmation(
    State(state): State<AppState>,
    payload: Result<Json<BookingConfirmation>, JsonRejection>,
) -> Result<impl IntoResponse, ConfirmationError> {
    let Json(payload) = payload.map_err(|_| ConfirmationError::InvalidJson)?;

    if let Some(field) = payload.missing_field() {
        return Err(ConfirmationError::MissingField(field));
    }

    let reference = payload.booking_reference.clone();
    let confirmation_url = format!("/confirmation/{}", reference);
    state.store.put(payload);

    info!("Booking confirmation received: {}", reference);

    Ok(Json(json!({
        "success": true,
        "message": "Booking confirmation received",
        "confirmationUrl": confirmation_url,
    })))
}

/// Serve the confirmation page for a booking reference
pub async fn confirmation_page(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&reference) {
        Some(booking) => (StatusCode::OK, Html(render::confirmation_page(&booking))),
        None => (StatusCode::NOT_FOUND, Html(render::not_found_page())),
    }
}
