//! In-memory session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserRole;

/// An authenticated session held in the session store.
///
/// Only the user id and role are kept here; the full user row is re-read
/// from the database on each request that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier (the cookie value).
    pub id: Uuid,
    /// The authenticated user.
    pub user_id: Uuid,
    /// The user's role at login time.
    pub role: UserRole,
    /// Whether this is a remember-me session (absolute TTL instead of
    /// rolling idle expiry).
    pub remember_me: bool,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last touched by a request.
    pub last_activity: DateTime<Utc>,
    /// When the session becomes invalid.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
