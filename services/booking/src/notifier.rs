//! Outbound notification to the confirmation service

use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// Display payload forwarded to the confirmation service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDisplayData {
    pub booking_reference: String,
    pub user_email: String,
    pub user_name: String,
    pub hotel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_address: Option<String>,
    pub room_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub check_in_date: String,
    pub check_out_date: String,
    pub nights: i64,
    pub adults_count: i32,
    pub children_count: i32,
    pub total_price: String,
    pub created_at: String,
}

/// Client for the confirmation service's internal endpoint.
///
/// Delivery is best effort: the confirmation page is a convenience view,
/// not the system of record, so failures are logged and never propagate
/// to the reservation flow.
#[derive(Clone)]
pub struct ConfirmationNotifier {
    client: reqwest::Client,
    base_url: String,
}

impl ConfirmationNotifier {
    /// Create a notifier whose requests time out after `timeout_seconds`
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Public URL of the confirmation page for a booking reference
    pub fn confirmation_url(&self, reference: &str) -> String {
        format!("{}/confirmation/{}", self.base_url, reference)
    }

    /// Forward booking display data, swallowing any failure
    pub async fn notify(&self, data: &BookingDisplayData) {
        let endpoint = format!("{}/internal/confirmation", self.base_url);

        match self.client.post(&endpoint).json(data).send().await {
            Ok(response) if response.status().is_success() => {
                info!(
                    "Confirmation forwarded for booking {}",
                    data.booking_reference
                );
            }
            Ok(response) => {
                warn!(
                    "Confirmation service returned HTTP {} for booking {}",
                    response.status(),
                    data.booking_reference
                );
            }
            Err(err) => {
                warn!(
                    "Failed to reach confirmation service for booking {}: {}",
                    data.booking_reference, err
                );
            }
        }
    }
}
