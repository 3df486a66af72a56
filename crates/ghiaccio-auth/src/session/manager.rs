//! Session lifecycle manager — creation, validation, rolling renewal,
//! destruction.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use ghiaccio_core::config::session::SessionConfig;
use ghiaccio_core::result::AppResult;
use ghiaccio_entity::session::Session;
use ghiaccio_entity::user::{User, UserRole};

use super::store::SessionStore;

/// Manages the session lifecycle on top of a [`SessionStore`].
///
/// Plain sessions carry a rolling idle TTL that is renewed on every
/// validated request; remember-me sessions get a fixed absolute lifetime.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    config: SessionConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(store: Arc<dyn SessionStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Creates a session for a freshly authenticated user.
    pub async fn create(&self, user: &User, remember_me: bool) -> AppResult<Session> {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user_id: user.id,
            role: user.role,
            remember_me,
            created_at: now,
            last_activity: now,
            expires_at: now + self.ttl(remember_me),
        };

        self.store.set(session.clone()).await?;

        info!(
            user_id = %user.id,
            session_id = %session.id,
            remember_me,
            "Session created"
        );

        Ok(session)
    }

    /// Validates a session id from a cookie.
    ///
    /// Returns `None` for unknown or expired sessions; expired ones are
    /// evicted on the spot. A valid plain session has its expiry pushed
    /// forward (rolling renewal).
    pub async fn validate(&self, id: Uuid) -> AppResult<Option<Session>> {
        let Some(mut session) = self.store.get(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        if session.is_expired(now) {
            debug!(session_id = %id, "Evicting expired session");
            self.store.destroy(id).await?;
            return Ok(None);
        }

        session.last_activity = now;
        if !session.remember_me {
            session.expires_at = now + self.ttl(false);
        }
        self.store.set(session.clone()).await?;

        Ok(Some(session))
    }

    /// Destroys a session (logout).
    pub async fn destroy(&self, id: Uuid) -> AppResult<()> {
        self.store.destroy(id).await?;
        info!(session_id = %id, "Session destroyed");
        Ok(())
    }

    /// Lifetime granted to a new or renewed session.
    pub fn ttl(&self, remember_me: bool) -> Duration {
        if remember_me {
            Duration::hours(self.config.remember_me_ttl_hours as i64)
        } else {
            Duration::minutes(self.config.idle_ttl_minutes as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemorySessionStore;
    use ghiaccio_entity::user::User;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Franky".to_string(),
            surname: "Rossi".to_string(),
            phone_number: "3401234567".to_string(),
            email: "franky@example.com".to_string(),
            password_hash: String::new(),
            salt: String::new(),
            role: UserRole::Customer,
            created_at: Utc::now(),
        }
    }

    fn manager() -> SessionManager {
        SessionManager::new(Arc::new(MemorySessionStore::new()), SessionConfig::default())
    }

    #[tokio::test]
    async fn test_create_and_validate() {
        let manager = manager();
        let user = sample_user();

        let session = manager.create(&user, false).await.unwrap();
        let validated = manager.validate(session.id).await.unwrap().unwrap();

        assert_eq!(validated.user_id, user.id);
        assert_eq!(validated.role, UserRole::Customer);
    }

    #[tokio::test]
    async fn test_unknown_session_is_rejected() {
        let manager = manager();
        assert!(manager.validate(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_evicted() {
        let store = Arc::new(MemorySessionStore::new());
        let manager = SessionManager::new(Arc::clone(&store) as Arc<dyn SessionStore>, SessionConfig::default());
        let user = sample_user();

        let mut session = manager.create(&user, false).await.unwrap();
        session.expires_at = Utc::now() - Duration::minutes(1);
        store.set(session.clone()).await.unwrap();

        assert!(manager.validate(session.id).await.unwrap().is_none());
        assert!(store.get(session.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rolling_renewal_extends_plain_sessions() {
        let manager = manager();
        let user = sample_user();

        let session = manager.create(&user, false).await.unwrap();
        let before = session.expires_at;

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        let renewed = manager.validate(session.id).await.unwrap().unwrap();
        assert!(renewed.expires_at > before);
    }

    #[tokio::test]
    async fn test_remember_me_ttl_is_absolute() {
        let manager = manager();
        let user = sample_user();

        let session = manager.create(&user, true).await.unwrap();
        let before = session.expires_at;

        let validated = manager.validate(session.id).await.unwrap().unwrap();
        assert_eq!(validated.expires_at, before);
        assert!(manager.ttl(true) > manager.ttl(false));
    }

    #[tokio::test]
    async fn test_destroy() {
        let manager = manager();
        let user = sample_user();

        let session = manager.create(&user, false).await.unwrap();
        manager.destroy(session.id).await.unwrap();
        assert!(manager.validate(session.id).await.unwrap().is_none());
    }
}
