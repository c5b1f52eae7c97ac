//! Booking persistence with availability enforcement

use chrono::{NaiveDate, Utc};
use rand::{Rng, distributions::Alphanumeric};
use sqlx::{Acquire, PgPool, Postgres, Row, Transaction};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus, ranges_overlap};
use crate::repositories::user::is_unique_violation;

/// Attempts at minting a unique booking reference before giving up
const REFERENCE_ATTEMPTS: u32 = 5;

/// Errors from the booking store
#[derive(Debug, Error)]
pub enum BookingStoreError {
    /// An overlapping confirmed or pending booking exists
    #[error("room is not available for the selected dates")]
    Unavailable,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Parameters for a new booking row
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: Uuid,
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults_count: i32,
    pub children_count: i32,
    pub total_price_cents: i64,
}

/// Booking store backed by the bookings table
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a confirmed booking if the room is free for the whole stay.
    ///
    /// The availability check and the insert run in one transaction,
    /// serialized per room by an advisory lock, so two overlapping
    /// requests for the same room cannot both commit.
    pub async fn create(&self, new: &NewBooking) -> Result<Booking, BookingStoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(i64::from(new.room_id))
            .execute(&mut *tx)
            .await?;

        let existing: Vec<(NaiveDate, NaiveDate)> = sqlx::query_as(
            r#"
            SELECT check_in_date, check_out_date
            FROM bookings
            WHERE room_id = $1
            AND status IN ($2, $3)
            "#,
        )
        .bind(new.room_id)
        .bind(BookingStatus::Confirmed.as_str())
        .bind(BookingStatus::Pending.as_str())
        .fetch_all(&mut *tx)
        .await?;

        let conflict = existing.iter().any(|&(ex_in, ex_out)| {
            ranges_overlap(ex_in, ex_out, new.check_in_date, new.check_out_date)
        });
        if conflict {
            return Err(BookingStoreError::Unavailable);
        }

        let booking = insert_with_reference(&mut tx, new).await?;

        tx.commit().await?;

        info!(
            "Booking {} created for room {} ({} to {})",
            booking.booking_reference, new.room_id, new.check_in_date, new.check_out_date
        );

        Ok(booking)
    }
}

/// Insert the booking row, regenerating the reference on the rare
/// collision with an existing one.
///
/// Each attempt runs under a savepoint so a unique-violation rollback
/// leaves the outer transaction usable.
async fn insert_with_reference(
    tx: &mut Transaction<'_, Postgres>,
    new: &NewBooking,
) -> Result<Booking, BookingStoreError> {
    let mut attempts = 0;

    loop {
        let reference = generate_booking_reference();

        let mut savepoint = tx.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO bookings (
                id, booking_reference, user_id, room_id,
                check_in_date, check_out_date, adults_count,
                children_count, total_price_cents, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, booking_reference, user_id, room_id,
                      check_in_date, check_out_date, adults_count,
                      children_count, total_price_cents, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&reference)
        .bind(new.user_id)
        .bind(new.room_id)
        .bind(new.check_in_date)
        .bind(new.check_out_date)
        .bind(new.adults_count)
        .bind(new.children_count)
        .bind(new.total_price_cents)
        .bind(BookingStatus::Confirmed.as_str())
        .fetch_one(&mut *savepoint)
        .await;

        match result {
            Ok(row) => {
                savepoint.commit().await?;

                let status: String = row.get("status");
                let status = BookingStatus::parse(&status).ok_or_else(|| {
                    sqlx::Error::Decode(format!("unknown booking status: {}", status).into())
                })?;

                let booking = Booking {
                    id: row.get("id"),
                    booking_reference: row.get("booking_reference"),
                    user_id: row.get("user_id"),
                    room_id: row.get("room_id"),
                    check_in_date: row.get("check_in_date"),
                    check_out_date: row.get("check_out_date"),
                    adults_count: row.get("adults_count"),
                    children_count: row.get("children_count"),
                    total_price_cents: row.get("total_price_cents"),
                    status,
                    created_at: row.get("created_at"),
                };
                return Ok(booking);
            }
            Err(err) if is_unique_violation(&err) && attempts < REFERENCE_ATTEMPTS => {
                savepoint.rollback().await?;
                attempts += 1;
                warn!(
                    "Booking reference {} collided, regenerating ({}/{})",
                    reference, attempts, REFERENCE_ATTEMPTS
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Generate a public booking reference: "BK", the current date, and a
/// random uppercase suffix
pub fn generate_booking_reference() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();

    format!("BK{}{}", Utc::now().format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_booking_reference_shape() {
        let pattern = Regex::new(r"^BK\d{8}[A-Z0-9]{6}$").unwrap();
        for _ in 0..20 {
            let reference = generate_booking_reference();
            assert!(
                pattern.is_match(&reference),
                "unexpected reference: {}",
                reference
            );
        }
    }

    #[test]
    fn test_booking_references_vary() {
        let first = generate_booking_reference();
        let second = generate_booking_reference();
        // Same date component, random suffix
        assert_eq!(first[..10], second[..10]);
        assert_ne!(first, second);
    }
}
