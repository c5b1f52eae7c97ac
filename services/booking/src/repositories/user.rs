//! User repository for credential storage

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::{PgPool, Row};
use thiserror::Error;
use tracing::info;

use crate::models::user::{RegisterRequest, User};

/// Errors from the credential store
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// The email is already bound to an account
    #[error("email already registered")]
    DuplicateEmail,

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Returns true when the error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Credential store backed by the users table
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a freshly hashed password.
    ///
    /// A unique-constraint violation on the email column maps to
    /// [`UserStoreError::DuplicateEmail`], so a registration that loses a
    /// race with a concurrent duplicate still reports a conflict.
    pub async fn create(&self, payload: &RegisterRequest) -> Result<User, UserStoreError> {
        // Hash the password
        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(payload.password.as_bytes(), &salt)
            .map_err(|e| UserStoreError::Hash(e.to_string()))?
            .to_string();

        let row = sqlx::query(
            r#"
            INSERT INTO users (last_name, first_name, address, phone, email, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, last_name, first_name, address, phone, email, password_hash, created_at
            "#,
        )
        .bind(&payload.last_name)
        .bind(&payload.first_name)
        .bind(&payload.address)
        .bind(&payload.phone)
        .bind(&payload.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                UserStoreError::DuplicateEmail
            } else {
                UserStoreError::Database(e)
            }
        })?;

        info!("Created user account for {}", payload.email);

        Ok(map_user(&row))
    }

    /// Find a user by exact email match
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, last_name, first_name, address, phone, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_user))
    }

    /// Verify a password against the stored hash
    pub fn verify_password(&self, user: &User, password: &str) -> Result<bool, UserStoreError> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| UserStoreError::Hash(e.to_string()))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

fn map_user(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: row.get("id"),
        last_name: row.get("last_name"),
        first_name: row.get("first_name"),
        address: row.get("address"),
        phone: row.get("phone"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}
