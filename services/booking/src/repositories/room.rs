//! Room inventory lookups

use sqlx::{PgPool, Row};

use crate::models::room::Room;

/// Read-only access to the room inventory tables
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by id, joined with its type and hotel
    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<Room>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT
                r.room_id,
                r.room_number,
                r.price_per_night_cents,
                rt.room_type_name,
                rt.max_occupancy,
                h.hotel_name,
                h.address AS hotel_address
            FROM rooms r
            JOIN room_types rt ON r.room_type_id = rt.room_type_id
            JOIN hotels h ON r.hotel_id = h.hotel_id
            WHERE r.room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let room = Room {
                    room_id: row.get("room_id"),
                    room_number: row.get("room_number"),
                    price_per_night_cents: row.get("price_per_night_cents"),
                    room_type_name: row.get("room_type_name"),
                    max_occupancy: row.get("max_occupancy"),
                    hotel_name: row.get("hotel_name"),
                    hotel_address: row.get("hotel_address"),
                };
                Ok(Some(room))
            }
            None => Ok(None),
        }
    }
}
