//! Booking confirmation payload

use serde::{Deserialize, Serialize};

/// Display data for one booking, as forwarded by the booking service.
///
/// Every field defaults so that a sparse payload still deserializes and
/// the service can name the first missing field itself.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingConfirmation {
    pub booking_reference: String,
    pub user_email: String,
    pub user_name: String,
    pub hotel_name: String,
    pub hotel_address: Option<String>,
    pub room_type: String,
    pub room_number: Option<String>,
    pub check_in_date: String,
    pub check_out_date: String,
    pub nights: i64,
    pub adults_count: i64,
    pub children_count: i64,
    pub total_price: String,
    pub created_at: Option<String>,
}

impl BookingConfirmation {
    /// First required display field that is missing, checked in a fixed
    /// order
    pub fn missing_field(&self) -> Option<&'static str> {
        let required = [
            ("bookingReference", &self.booking_reference),
            ("userEmail", &self.user_email),
            ("userName", &self.user_name),
            ("hotelName", &self.hotel_name),
            ("roomType", &self.room_type),
            ("checkInDate", &self.check_in_date),
            ("checkOutDate", &self.check_out_date),
            ("totalPrice", &self.total_price),
        ];

        required
            .iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
    }
}

#[cfg(test)]
impl BookingConfirmation {
    /// Fully populated payload for tests
    pub(crate) fn sample() -> Self {
        Self {
            booking_reference: "BK20250610ABC123".to_string(),
            user_email: "jane@example.com".to_string(),
            user_name: "Jane Doe".to_string(),
            hotel_name: "Seaside Hotel".to_string(),
            hotel_address: Some("1 Beach Rd".to_string()),
            room_type: "Double".to_string(),
            room_number: Some("204".to_string()),
            check_in_date: "2025-06-10".to_string(),
            check_out_date: "2025-06-13".to_string(),
            nights: 3,
            adults_count: 2,
            children_count: 1,
            total_price: "360.00".to_string(),
            created_at: Some("2025-06-01 12:00:00".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_payload_has_no_missing_field() {
        assert_eq!(BookingConfirmation::sample().missing_field(), None);
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut payload = BookingConfirmation::sample();
        payload.user_name = String::new();
        payload.total_price = String::new();
        // userName comes before totalPrice in the fixed order
        assert_eq!(payload.missing_field(), Some("userName"));

        payload.user_name = "Jane Doe".to_string();
        assert_eq!(payload.missing_field(), Some("totalPrice"));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut payload = BookingConfirmation::sample();
        payload.hotel_name = "   ".to_string();
        assert_eq!(payload.missing_field(), Some("hotelName"));
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let mut payload = BookingConfirmation::sample();
        payload.hotel_address = None;
        payload.room_number = None;
        payload.created_at = None;
        assert_eq!(payload.missing_field(), None);
    }

    #[test]
    fn test_sparse_payload_deserializes() {
        let payload: BookingConfirmation =
            serde_json::from_str(r#"{"bookingReference": "BK20250610ABC123"}"#).unwrap();
        assert_eq!(payload.booking_reference, "BK20250610ABC123");
        assert_eq!(payload.missing_field(), Some("userEmail"));
    }
}
