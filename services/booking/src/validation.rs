//! Input validation for registration and login

use regex::Regex;
use std::sync::OnceLock;

use crate::models::user::RegisterRequest;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate phone number (exactly 10 digits)
pub fn validate_phone(phone: &str) -> Result<(), String> {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

    if !regex.is_match(phone) {
        return Err("Phone must be exactly 10 digits".to_string());
    }

    Ok(())
}

/// Validate password strength (min 8 chars, 1 uppercase, 1 digit)
pub fn validate_password(password: &str) -> Result<(), String> {
    let long_enough = password.chars().count() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !long_enough || !has_upper || !has_digit {
        return Err(
            "Password must be at least 8 characters with 1 uppercase and 1 number".to_string(),
        );
    }

    Ok(())
}

/// Run the ordered registration checks; the first failure wins
pub fn validate_registration(payload: &RegisterRequest) -> Result<(), String> {
    let required = [
        &payload.last_name,
        &payload.first_name,
        &payload.address,
        &payload.phone,
        &payload.email,
        &payload.password,
    ];

    if required.iter().any(|field| field.trim().is_empty()) {
        return Err("All fields are required".to_string());
    }

    validate_email(payload.email.trim())?;
    validate_phone(payload.phone.trim())?;
    validate_password(&payload.password)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("guest@example.com").is_ok());
        assert!(validate_email("first.last+tag@hotel.travel").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567").is_ok());
        assert!(validate_phone("555-123-4567").is_err());
        assert!(validate_phone("555123456").is_err());
        assert!(validate_phone("55512345678").is_err());
        assert!(validate_phone("555123456a").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("password1").is_err()); // no uppercase
        assert!(validate_password("Password").is_err()); // no digit
        assert!(validate_password("Pass1").is_err()); // too short
    }

    #[test]
    fn test_validate_registration_order() {
        let valid = RegisterRequest {
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            address: "1 Main St".to_string(),
            phone: "5551234567".to_string(),
            email: "jane@example.com".to_string(),
            password: "Password123".to_string(),
        };
        assert!(validate_registration(&valid).is_ok());

        // A blank field wins over a bad email
        let mut missing = valid.clone();
        missing.address = "   ".to_string();
        missing.email = "bad".to_string();
        assert_eq!(
            validate_registration(&missing).unwrap_err(),
            "All fields are required"
        );

        // Email is checked before phone
        let mut bad_email = valid.clone();
        bad_email.email = "bad".to_string();
        bad_email.phone = "123".to_string();
        assert_eq!(
            validate_registration(&bad_email).unwrap_err(),
            "Invalid email format"
        );

        // Phone is checked before password
        let mut bad_phone = valid.clone();
        bad_phone.phone = "123".to_string();
        bad_phone.password = "short".to_string();
        assert_eq!(
            validate_registration(&bad_phone).unwrap_err(),
            "Phone must be exactly 10 digits"
        );

        let mut bad_password = valid;
        bad_password.password = "password1".to_string();
        assert_eq!(
            validate_registration(&bad_password).unwrap_err(),
            "Password must be at least 8 characters with 1 uppercase and 1 number"
        );
    }
}
