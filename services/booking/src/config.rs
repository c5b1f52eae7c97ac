//! Booking service configuration

use std::env;

/// Runtime configuration for the booking service
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Base URL of the confirmation service
    pub confirmation_base_url: String,
    /// Timeout in seconds for the confirmation notification call
    pub notify_timeout_seconds: u64,
    /// Session inactivity timeout in seconds
    pub session_timeout_seconds: u64,
}

impl BookingConfig {
    /// Create a new BookingConfig from environment variables
    ///
    /// # Environment Variables
    /// - `BOOKING_BIND_ADDR`: listen address (default: "0.0.0.0:8080")
    /// - `CONFIRMATION_BASE_URL`: confirmation service base URL
    ///   (default: "http://localhost:3000")
    /// - `CONFIRMATION_TIMEOUT_SECONDS`: notification timeout (default: 10)
    /// - `SESSION_TIMEOUT_SECONDS`: session inactivity timeout (default: 1800)
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("BOOKING_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let confirmation_base_url = env::var("CONFIRMATION_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let notify_timeout_seconds = env::var("CONFIRMATION_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let session_timeout_seconds = env::var("SESSION_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1800);

        Self {
            bind_addr,
            confirmation_base_url,
            notify_timeout_seconds,
            session_timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_booking_config_defaults() {
        // Ambient overrides would invalidate the default assertions
        for var in [
            "BOOKING_BIND_ADDR",
            "CONFIRMATION_BASE_URL",
            "CONFIRMATION_TIMEOUT_SECONDS",
            "SESSION_TIMEOUT_SECONDS",
        ] {
            if env::var(var).is_ok() {
                return;
            }
        }

        let config = BookingConfig::from_env();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.confirmation_base_url, "http://localhost:3000");
        assert_eq!(config.notify_timeout_seconds, 10);
        assert_eq!(config.session_timeout_seconds, 1800);
    }
}
