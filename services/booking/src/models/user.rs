//! User model and account payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub last_name: String,
    pub first_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration request payload
///
/// Fields default to empty strings so that absent keys surface as
/// validation failures instead of deserialization rejections.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub last_name: String,
    pub first_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Copy with surrounding whitespace stripped from every field except
    /// the password, which is hashed verbatim
    pub fn trimmed(&self) -> Self {
        Self {
            last_name: self.last_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Login request payload
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
