//! Booking model, date-range overlap rule, and pricing

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a stored status value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// Booking entity
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub booking_reference: String,
    pub user_id: Uuid,
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults_count: i32,
    pub children_count: i32,
    pub total_price_cents: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Reservation request payload
///
/// Required fields are optional here so the service can name the first
/// missing one instead of rejecting the whole body.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReserveRequest {
    pub room_id: Option<i32>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub adults_count: Option<i32>,
    pub children_count: Option<i32>,
}

/// Whether two half-open `[check_in, check_out)` ranges share a night.
///
/// Checkout day is exclusive, so a same-day turnover is not a conflict.
pub fn ranges_overlap(
    existing_in: NaiveDate,
    existing_out: NaiveDate,
    new_in: NaiveDate,
    new_out: NaiveDate,
) -> bool {
    existing_in < new_out && existing_out > new_in
}

/// Number of nights between check-in and check-out
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Format integer cents as a decimal currency string
pub fn format_price_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_overlapping_ranges_conflict() {
        // Existing booking 2025-06-10 to 2025-06-15
        let (ex_in, ex_out) = (date("2025-06-10"), date("2025-06-15"));

        // New stay starting inside the existing one
        assert!(ranges_overlap(ex_in, ex_out, date("2025-06-14"), date("2025-06-18")));
        // New stay ending inside the existing one
        assert!(ranges_overlap(ex_in, ex_out, date("2025-06-08"), date("2025-06-11")));
        // New stay containing the existing one
        assert!(ranges_overlap(ex_in, ex_out, date("2025-06-09"), date("2025-06-16")));
        // Existing stay containing the new one
        assert!(ranges_overlap(ex_in, ex_out, date("2025-06-11"), date("2025-06-13")));
    }

    #[test]
    fn test_same_day_turnover_is_not_a_conflict() {
        let (ex_in, ex_out) = (date("2025-06-10"), date("2025-06-15"));

        // Check-in on the existing checkout day
        assert!(!ranges_overlap(ex_in, ex_out, date("2025-06-15"), date("2025-06-20")));
        // Check-out on the existing check-in day
        assert!(!ranges_overlap(ex_in, ex_out, date("2025-06-05"), date("2025-06-10")));
        // Disjoint ranges
        assert!(!ranges_overlap(ex_in, ex_out, date("2025-06-20"), date("2025-06-22")));
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between(date("2025-06-10"), date("2025-06-13")), 3);
        assert_eq!(nights_between(date("2025-06-30"), date("2025-07-01")), 1);
    }

    #[test]
    fn test_pricing_has_no_rounding_drift() {
        // 3 nights at $120.00/night
        let nights = nights_between(date("2025-06-10"), date("2025-06-13"));
        let total = nights * 12_000;
        assert_eq!(total, 36_000);
        assert_eq!(format_price_cents(total), "360.00");
    }

    #[test]
    fn test_format_price_cents() {
        assert_eq!(format_price_cents(0), "0.00");
        assert_eq!(format_price_cents(5), "0.05");
        assert_eq!(format_price_cents(950), "9.50");
        assert_eq!(format_price_cents(12_345), "123.45");
    }

    #[test]
    fn test_booking_status_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("checked_in"), None);
    }
}
