//! In-memory session store with sliding expiry

use rand::{Rng, distributions::Alphanumeric};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::user::User;

/// Length of the opaque session token
const TOKEN_LENGTH: usize = 48;

/// Session store configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Inactivity timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 1800, // 30 minutes
        }
    }
}

/// Identity bound to an authenticated session
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl SessionUser {
    /// Guest display name used on the confirmation page
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Session store entry
#[derive(Debug)]
struct SessionEntry {
    user: SessionUser,
    last_activity: Instant,
}

/// Server-side session store keyed by opaque token.
///
/// Process-local: sessions do not survive a restart.
#[derive(Clone)]
pub struct SessionStore {
    config: SessionConfig,
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a session for the user under a freshly minted token.
    ///
    /// Every login mints a new token, which doubles as session
    /// regeneration against fixation.
    pub async fn create(&self, user: &User) -> String {
        let token = generate_token();

        let entry = SessionEntry {
            user: SessionUser {
                user_id: user.id,
                email: user.email.clone(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
            },
            last_activity: Instant::now(),
        };

        self.sessions.lock().await.insert(token.clone(), entry);

        token
    }

    /// Validate a session token and refresh its activity timestamp.
    ///
    /// Read with side effect: an expired session is removed here, and a
    /// live one has its inactivity window extended to the full timeout.
    pub async fn validate(&self, token: &str) -> Option<SessionUser> {
        let mut sessions = self.sessions.lock().await;

        let entry = sessions.get_mut(token)?;

        if entry.last_activity.elapsed() > Duration::from_secs(self.config.timeout_seconds) {
            sessions.remove(token);
            return None;
        }

        entry.last_activity = Instant::now();
        Some(entry.user.clone())
    }

    /// Destroy the session bound to the token, if any
    pub async fn destroy(&self, token: &str) {
        self.sessions.lock().await.remove(token);
    }

    #[cfg(test)]
    async fn backdate(&self, token: &str, age: Duration) -> bool {
        // Instant cannot represent times before boot, so the caller must
        // skip the scenario on a short-uptime machine
        let Some(past) = Instant::now().checked_sub(age) else {
            return false;
        };
        let mut sessions = self.sessions.lock().await;
        if let Some(entry) = sessions.get_mut(token) {
            entry.last_activity = past;
        }
        true
    }

    #[cfg(test)]
    async fn age(&self, token: &str) -> Option<Duration> {
        let sessions = self.sessions.lock().await;
        sessions.get(token).map(|entry| entry.last_activity.elapsed())
    }
}

/// Generate an opaque session token
fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            address: "1 Main St".to_string(),
            phone: "5551234567".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_validate_refreshes_last_activity() {
        let store = SessionStore::new(SessionConfig::default());
        let token = store.create(&test_user()).await;

        if !store.backdate(&token, Duration::from_secs(1799)).await {
            return;
        }

        let session = store.validate(&token).await;
        assert!(session.is_some());
        assert_eq!(session.unwrap().email, "jane@example.com");

        // The touch reset the inactivity clock
        let age = store.age(&token).await.unwrap();
        assert!(age < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_expired_session_is_destroyed() {
        let store = SessionStore::new(SessionConfig::default());
        let token = store.create(&test_user()).await;

        if !store.backdate(&token, Duration::from_secs(1801)).await {
            return;
        }

        assert!(store.validate(&token).await.is_none());
        // Destroyed as a side effect, not merely rejected
        assert!(store.age(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_token_is_invalid() {
        let store = SessionStore::new(SessionConfig::default());
        assert!(store.validate("no-such-token").await.is_none());
    }

    #[tokio::test]
    async fn test_destroyed_session_is_rejected() {
        let store = SessionStore::new(SessionConfig::default());
        let token = store.create(&test_user()).await;

        assert!(store.validate(&token).await.is_some());
        store.destroy(&token).await;
        assert!(store.validate(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_login_mints_distinct_tokens() {
        let store = SessionStore::new(SessionConfig::default());
        let user = test_user();

        let first = store.create(&user).await;
        let second = store.create(&user).await;

        assert_ne!(first, second);
        assert_eq!(first.len(), TOKEN_LENGTH);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_full_name() {
        let store = SessionStore::new(SessionConfig::default());
        let token = store.create(&test_user()).await;

        let session = store.validate(&token).await.unwrap();
        assert_eq!(session.full_name(), "Jane Doe");
    }
}
