//! Booking service routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{NaiveDate, Utc};
use serde_json::json;
use tracing::info;

use crate::AppState;
use crate::error::{BookingError, BookingResult};
use crate::models::booking::{ReserveRequest, format_price_cents, nights_between};
use crate::models::user::{LoginRequest, RegisterRequest};
use crate::notifier::BookingDisplayData;
use crate::repositories::booking::NewBooking;
use crate::validation;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session_id";

/// Create the router for the booking service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/reserve", post(reserve))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "booking-service"
    }))
}

/// User registration endpoint
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> BookingResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(invalid_json)?;

    validation::validate_registration(&payload).map_err(BookingError::Validation)?;

    let payload = payload.trimmed();

    // The store's unique constraint still backstops this check against
    // concurrent duplicate submissions
    if state
        .user_repository
        .find_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(BookingError::Conflict(
            "Email already registered. Please login.".to_string(),
        ));
    }

    let user = state.user_repository.create(&payload).await?;

    info!("User registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Registration successful! Redirecting to login...",
        })),
    ))
}

/// User login endpoint
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> BookingResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(invalid_json)?;

    let email = payload.email.trim();

    if email.is_empty() {
        return Err(BookingError::Validation(
            "Email address is required".to_string(),
        ));
    }
    if payload.password.is_empty() {
        return Err(BookingError::Validation("Password is required".to_string()));
    }
    validation::validate_email(email).map_err(BookingError::Validation)?;

    // The same message for an unknown email and a wrong password, so the
    // response does not reveal which one it was
    let user = state
        .user_repository
        .find_by_email(email)
        .await?
        .ok_or_else(|| BookingError::Auth("Invalid email or password".to_string()))?;

    if !state.user_repository.verify_password(&user, &payload.password)? {
        return Err(BookingError::Auth("Invalid email or password".to_string()));
    }

    // Regenerate the session identifier: any previously presented token is
    // discarded and a fresh one minted
    if let Some(old) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(old.value()).await;
    }
    let token = state.sessions.create(&user).await;

    let jar = jar.add(session_cookie(token));

    info!("User logged in: {}", user.email);

    Ok((
        jar,
        Json(json!({
            "success": true,
            "message": "Login successful! Redirecting to reservation page...",
            "redirect": "reserve.html",
        })),
    ))
}

/// User logout endpoint
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> BookingResult<impl IntoResponse> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value()).await;
    }

    // Expire the client cookie immediately as well, so logout holds even
    // for clients that ignore the redirect
    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();
    let jar = jar.add(removal);

    Ok((
        jar,
        Json(json!({
            "success": true,
            "message": "Logged out successfully",
            "redirect": "index.html",
        })),
    ))
}

/// Reservation endpoint
pub async fn reserve(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<ReserveRequest>, JsonRejection>,
) -> BookingResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(invalid_json)?;

    let session = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.validate(cookie.value()).await,
        None => None,
    }
    .ok_or_else(|| {
        BookingError::Auth("Session expired or invalid. Please login again.".to_string())
    })?;

    let room_id = payload.room_id.ok_or_else(|| missing_field("roomId"))?;
    let check_in_raw = payload
        .check_in_date
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| missing_field("checkInDate"))?;
    let check_out_raw = payload
        .check_out_date
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| missing_field("checkOutDate"))?;
    let adults_count = payload
        .adults_count
        .ok_or_else(|| missing_field("adultsCount"))?;
    let children_count = payload.children_count.unwrap_or(0);

    let check_in = parse_date(check_in_raw)?;
    let check_out = parse_date(check_out_raw)?;

    // Date-only comparison; there is no time component on either side
    let today = Utc::now().date_naive();
    if check_in < today {
        return Err(BookingError::Validation(
            "Check-in date cannot be in the past".to_string(),
        ));
    }
    if check_out <= check_in {
        return Err(BookingError::Validation(
            "Check-out date must be after check-in date".to_string(),
        ));
    }
    if adults_count < 1 {
        return Err(BookingError::Validation(
            "At least one adult is required".to_string(),
        ));
    }
    if children_count < 0 {
        return Err(BookingError::Validation(
            "Invalid children count".to_string(),
        ));
    }

    let room = state
        .room_repository
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| BookingError::NotFound("Room not found".to_string()))?;

    if adults_count + children_count > room.max_occupancy {
        return Err(BookingError::Validation(format!(
            "Room capacity exceeded. Maximum occupancy: {}",
            room.max_occupancy
        )));
    }

    let nights = nights_between(check_in, check_out);
    let total_price_cents = nights * room.price_per_night_cents;

    let booking = state
        .booking_repository
        .create(&NewBooking {
            user_id: session.user_id,
            room_id,
            check_in_date: check_in,
            check_out_date: check_out,
            adults_count,
            children_count,
            total_price_cents,
        })
        .await?;

    // Best-effort forwarding; the booking is already committed and a
    // notification failure must not fail the reservation
    let display = BookingDisplayData {
        booking_reference: booking.booking_reference.clone(),
        user_email: session.email.clone(),
        user_name: session.full_name(),
        hotel_name: room.hotel_name.clone(),
        hotel_address: room.hotel_address.clone(),
        room_type: room.room_type_name.clone(),
        room_number: Some(room.room_number.clone()),
        check_in_date: check_in.to_string(),
        check_out_date: check_out.to_string(),
        nights,
        adults_count,
        children_count,
        total_price: format_price_cents(total_price_cents),
        created_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };
    state.notifier.notify(&display).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Reservation created successfully!",
            "data": {
                "bookingReference": booking.booking_reference,
                "confirmationUrl": state.notifier.confirmation_url(&booking.booking_reference),
            },
        })),
    ))
}

fn invalid_json(_: JsonRejection) -> BookingError {
    BookingError::Validation("Invalid JSON data".to_string())
}

fn missing_field(name: &str) -> BookingError {
    BookingError::Validation(format!("Missing required field: {}", name))
}

fn parse_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| BookingError::Validation("Invalid date format. Use YYYY-MM-DD".to_string()))
}

fn session_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-06-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
        assert!(parse_date("06/10/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_missing_field_message() {
        let err = missing_field("checkInDate");
        assert_eq!(err.to_string(), "Missing required field: checkInDate");
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("token-value".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
