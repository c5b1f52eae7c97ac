//! Room inventory model

use serde::Serialize;
use sqlx::FromRow;

/// A room joined with its type and hotel
///
/// Read-only here; room inventory is managed outside this system.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Room {
    pub room_id: i32,
    pub room_number: String,
    pub price_per_night_cents: i64,
    pub room_type_name: String,
    pub max_occupancy: i32,
    pub hotel_name: String,
    pub hotel_address: Option<String>,
}
